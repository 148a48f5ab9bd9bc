pub mod notice_bar;
pub mod page_header;
