pub const DEFAULT_DATA_DIR: &str = "./js/data";
pub const DEFAULT_ADDRESS: &str = "127.0.0.1:1414";

pub const INDEX_FILE_NAME: &str = "index.json";
pub const QUIZ_FILE_EXTENSION: &str = ".json";

pub const GENERATE_INDEX_URL: &str = "/api/generate-index";

// Provenance tags written to `generated_by`
pub const GENERATED_BY_CLI: &str = "generate-index";
pub const GENERATED_BY_API: &str = "http-api";

pub const UNTITLED: &str = "Untitled";
