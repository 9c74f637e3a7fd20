pub mod common;
mod event_pages;
