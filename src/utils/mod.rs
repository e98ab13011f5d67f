pub mod reading_time;
pub mod slug;
