pub mod upload;

pub use upload::UploadHandler;
