pub mod chapter;
pub mod config;
pub mod extractor;
pub mod logger;
pub mod migrator;
pub mod utils;

pub use config::Config;
pub use extractor::{ImgRef, extract_img_tags};
pub use migrator::FigureMigrator;
pub use utils::display_elapsed_time;
