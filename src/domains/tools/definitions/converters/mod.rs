pub mod color_converter;
pub mod csv_to_json;
pub mod number_base;
pub mod timestamp;

pub use color_converter::ColorConverterTool;
pub use csv_to_json::CsvToJsonTool;
pub use number_base::NumberBaseTool;
pub use timestamp::TimestampTool;
