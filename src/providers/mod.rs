pub mod dynu;
