use crate::domain::value_objects::{
    enums::video_types::VideoType,
    tracking::{TrackingStatus, TrackingSummary, VideoTypeCount},
};

const QUOTA_COMPLETE: &str = "Objectif complet";
const DETAIL_SEPARATOR: &str = ", ";

/// Compares delivered counts against the monthly quota over the full
/// [`VideoType::ALL`] set. Over-delivery on one type clamps to a remaining
/// of 0 for that type; it never offsets another type.
pub fn summarize_tracking(quotas: &VideoTypeCount, delivered: &VideoTypeCount) -> TrackingSummary {
    let mut delivered_total = 0;
    let mut remaining_total = 0;
    let mut remaining_parts: Vec<String> = Vec::new();

    for video_type in VideoType::ALL {
        let done = delivered.get(video_type);
        let remaining = (quotas.get(video_type) - done).max(0);

        delivered_total += done;
        remaining_total += remaining;

        if remaining > 0 {
            remaining_parts.push(format!("{} {}", remaining, video_type));
        }
    }

    let status = if remaining_total == 0 {
        TrackingStatus::Ok
    } else {
        TrackingStatus::EnAttente
    };

    let remaining_details = if remaining_parts.is_empty() {
        QUOTA_COMPLETE.to_string()
    } else {
        remaining_parts.join(DETAIL_SEPARATOR)
    };

    TrackingSummary {
        delivered_total,
        remaining_total,
        status,
        remaining_details,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quotas_of_30() -> VideoTypeCount {
        VideoTypeCount {
            ootd: 10,
            training: 8,
            before_after: 5,
            sports_80s: 4,
            cinematic: 3,
        }
    }

    #[test]
    fn complete_month_reports_ok_with_sentinel() {
        let quotas = quotas_of_30();
        let delivered = quotas.clone();

        let summary = summarize_tracking(&quotas, &delivered);

        assert_eq!(summary.delivered_total, 30);
        assert_eq!(summary.remaining_total, 0);
        assert_eq!(summary.status, TrackingStatus::Ok);
        assert_eq!(summary.remaining_details, "Objectif complet");
    }

    #[test]
    fn partial_month_lists_only_missing_types() {
        let quotas = quotas_of_30();
        let delivered = VideoTypeCount {
            ootd: 10,
            training: 6,
            before_after: 5,
            sports_80s: 4,
            cinematic: 1,
        };

        let summary = summarize_tracking(&quotas, &delivered);

        assert_eq!(summary.remaining_total, 4);
        assert_eq!(summary.status, TrackingStatus::EnAttente);
        assert_eq!(summary.remaining_details, "2 TRAINING, 2 CINEMATIC");
    }

    #[test]
    fn over_delivery_clamps_instead_of_going_negative() {
        let quotas = VideoTypeCount {
            ootd: 2,
            training: 2,
            ..Default::default()
        };
        let delivered = VideoTypeCount {
            ootd: 5,
            training: 0,
            ..Default::default()
        };

        let summary = summarize_tracking(&quotas, &delivered);

        // The 3 extra OOTD videos do not shrink the TRAINING debt.
        assert_eq!(summary.remaining_total, 2);
        assert_eq!(summary.remaining_details, "2 TRAINING");
    }

    #[test]
    fn delivering_more_never_increases_remaining() {
        let quotas = quotas_of_30();
        let mut delivered = VideoTypeCount::default();

        let mut previous = summarize_tracking(&quotas, &delivered).remaining_total;
        for video_type in VideoType::ALL {
            delivered.add(video_type, 3);
            let current = summarize_tracking(&quotas, &delivered).remaining_total;
            assert!(current <= previous);
            previous = current;
        }
    }
}
