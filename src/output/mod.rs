pub mod formatter;

pub use formatter::{
    format_district_detail, format_districts_list, format_score, format_score_table,
    should_use_colors,
};
