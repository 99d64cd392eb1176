pub mod config;
pub mod dataset_file;
pub mod export;
pub mod mock_data;
pub mod provider;
pub mod state;
pub mod stats;
