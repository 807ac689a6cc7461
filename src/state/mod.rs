mod cache;
mod profile_file;

pub use cache::ReportCache;
pub use profile_file::load_profile;
