pub mod filter_pipeline;
pub mod pipeline_logger;
pub mod process_image_use_case;
