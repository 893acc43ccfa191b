pub const OPENROUTER_API_URL: &str = "https://openrouter.ai/api/v1/images/generations";
pub const TOGETHER_API_URL: &str = "https://api.together.xyz/v1/images/generations";

pub const OPENROUTER_SECRET: &str = "OPENROUTER_API_KEY";
pub const TOGETHER_SECRET: &str = "TOGETHER_API_KEY";

pub const OPENROUTER_MODEL: &str = "meta-llama/llama-3.2-90b-vision-instruct:free";
pub const FLUX_SCHNELL_MODEL: &str = "black-forest-labs/FLUX.1-schnell-Free";
pub const SDXL_MODEL: &str = "stabilityai/stable-diffusion-xl-base-1.0";

pub const PENCIL_STYLE_SUFFIX: &str = ", a lápiz, en blanco y negro, con mucho detalle";
pub const STORYBOOK_STYLE_SUFFIX: &str =
    ", ilustración a lápiz para cuento infantil, en blanco y negro";
pub const SKETCH_STYLE_SUFFIX: &str =
    ", pencil sketch, black and white, highly detailed children's book illustration";

pub const RESPONSE_FORMAT_B64_JSON: &str = "b64_json";
pub const IMAGES_PER_REQUEST: u8 = 1;

pub const CAPTION: &str = "Generated illustration";
pub const DEFAULT_OUTPUT_STEM: &str = "illustration";

pub const FLAG_PROVIDER: &str = "-p";
pub const FLAG_PROVIDER_LONG: &str = "--provider";
pub const FLAG_OUTPUT: &str = "-o";
pub const FLAG_OUTPUT_LONG: &str = "--output";
pub const FLAG_ENDPOINT: &str = "--endpoint";
