//! User-facing reply texts.
//!
//! The search adapter reports *what* failed through [`SearchError`]; this
//! module decides how every outcome reads on Telegram. All strings are the
//! bot's fixed Indonesian texts and rendering is fully deterministic.

use crate::search::{SearchError, SearchResults};

/// Reply for a well-formed response with no organic results.
pub const NO_RESULTS: &str = "Maaf, tidak ada hasil yang ditemukan.";

/// Reply for any transport-level fault. Detail stays in the server log.
pub const INTERNAL_ERROR: &str =
    "Terjadi kesalahan internal saat mencoba mencari. Coba lagi nanti.";

/// Reply for `/cari` invoked without a query.
pub const USAGE_HINT: &str =
    "Tolong berikan kata kunci setelah `/cari`. Contoh: `/cari resep nasi goreng`";

/// Greeting sent by `/start`.
pub fn greeting(name: &str) -> String {
    format!(
        "Halo {name}!\n\nSaya adalah bot pencari. Kirim saya pesan dengan format:\n`/cari [kata kunci]`"
    )
}

/// Acknowledgment sent before the search request goes out.
pub fn acknowledgment(query: &str) -> String {
    format!("Oke, sedang mencari informasi tentang '{query}'...")
}

/// Render a search outcome as one reply.
///
/// Success formats a header naming the query followed by one block per
/// result (link, bold title, italic snippet). Formatting is all-or-nothing;
/// a failure never produces a partial block.
pub fn render(query: &str, outcome: Result<SearchResults, SearchError>) -> String {
    match outcome {
        Err(SearchError::Api(message)) => {
            format!("Maaf, terjadi kesalahan dari SerpApi: {message}")
        }
        Err(SearchError::Timeout) | Err(SearchError::Network(_)) => INTERNAL_ERROR.to_string(),
        Ok(results) if results.items.is_empty() => NO_RESULTS.to_string(),
        Ok(results) => {
            let mut out = format!("🔍 *Hasil Pencarian untuk: {query}*\n\n");
            for item in &results.items {
                out.push_str(&format!(
                    "{}\n*{}*\n_{}_\n\n",
                    item.link, item.title, item.snippet
                ));
            }
            out
        }
    }
}
