pub mod brand_voice;
