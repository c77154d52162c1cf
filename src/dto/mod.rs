pub mod send_outcome;
