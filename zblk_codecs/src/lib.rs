mod deflate;
mod passthrough;

pub use deflate::DeflateCodec;
pub use passthrough::PassThroughCodec;
