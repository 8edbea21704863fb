pub mod day_record;
pub mod grid;
pub mod month;
pub mod work_type;
