mod serpapi;

pub use serpapi::SerpApiProvider;
