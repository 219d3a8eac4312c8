pub mod base64;
pub mod html_entities;
pub mod jwt_decoder;

pub use self::base64::Base64Tool;
pub use html_entities::HtmlEntitiesTool;
pub use jwt_decoder::JwtDecoderTool;
