pub mod case_converter;
pub mod regex_tester;
pub mod text_diff;
pub mod word_counter;

pub use case_converter::CaseConverterTool;
pub use regex_tester::RegexTesterTool;
pub use text_diff::TextDiffTool;
pub use word_counter::WordCounterTool;
