pub mod output_filter;

pub use output_filter::{extract_hostnames, filter_noisy_lines, merge_unique, strip_ansi_codes};
