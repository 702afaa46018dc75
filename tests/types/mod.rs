pub mod invalid_argument;
