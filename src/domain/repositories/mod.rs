pub mod creator_program;
