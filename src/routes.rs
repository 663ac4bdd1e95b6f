//! The versioned route table.
//!
//! Every generation's routes live in one declarative list; patterns are
//! never removed, only superseded by additive, more capable ones. The
//! endpoint catalog is rendered from the same list, so the published index
//! and the mounted routes cannot drift apart.

use axum::Router;
use axum::routing::{MethodRouter, get};
use serde_json::{Value, json};
use tower_http::cors::{Any, CorsLayer};

use crate::AppState;
use crate::api::{list, meta, names, number, phonology, search};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteHandler {
    Catalog,
    Search,
    SearchReverse,
    SearchSimple,
    Search1d,
    Search1dReverse,
    SearchBidirectional,
    List,
    ListFiltered,
    Random,
    RandomFiltered,
    NumberToNavi,
    NaviToNumber,
    Lenition,
    Version,
    NameSingle,
    NameFull,
    NameAlu,
    NameSingleDiscord,
    NameFullDiscord,
    NameAluDiscord,
    TotalWords,
    TotalWordsLocalized,
    WordCount,
    Homonyms,
    Oddballs,
    MultiIpa,
    PhonemeDistros,
    Validity,
    ValidityDiscord,
    Update,
    Health,
}

/// One published route. `pattern` is the public form, relative to the API
/// root, with `{braces}` placeholders as clients see them in the catalog.
pub struct RouteDescriptor {
    pub pattern: &'static str,
    pub key: &'static str,
    pub description: &'static str,
    pub min_version: u8,
    pub handler: RouteHandler,
}

const fn route(
    pattern: &'static str,
    key: &'static str,
    description: &'static str,
    min_version: u8,
    handler: RouteHandler,
) -> RouteDescriptor {
    RouteDescriptor {
        pattern,
        key,
        description,
        min_version,
        handler,
    }
}

pub const ROUTES: &[RouteDescriptor] = &[
    // generation 1: the original surface
    route("/", "endpoints_url", "this endpoint catalog", 1, RouteHandler::Catalog),
    route("/fwew/{nav}", "search_url", "search Na'vi word(s), with affix analysis", 1, RouteHandler::Search),
    route("/fwew/r/{lang}/{local}", "search_reverse_url", "search local word(s) to Na'vi", 1, RouteHandler::SearchReverse),
    route("/list", "list_url", "list all dictionary entries", 1, RouteHandler::List),
    route("/list/{args}", "list_filter_url", "list entries matching filter triples", 1, RouteHandler::ListFiltered),
    route("/random/{n}", "random_url", "n random entries", 1, RouteHandler::Random),
    route("/random/{n}/{args}", "random_filter_url", "n random entries matching filter triples", 1, RouteHandler::RandomFiltered),
    route("/number/r/{num}", "number_to_navi_url", "convert an integer (decimal/octal/hex) to Na'vi", 1, RouteHandler::NumberToNavi),
    route("/number/{word}", "navi_to_number_url", "convert a Na'vi numeral word to a number", 1, RouteHandler::NaviToNumber),
    route("/lenition", "lenition_url", "the lenition table", 1, RouteHandler::Lenition),
    route("/version", "version_url", "API, engine, and dictionary versions", 1, RouteHandler::Version),
    // generation 2: simple and flattened search shims, bidirectional search
    route("/fwew-simple/{nav}", "search_simple_url", "search without affix analysis (latency-sensitive callers)", 2, RouteHandler::SearchSimple),
    route("/fwew-1d/{nav}", "search_1d_url", "search with results flattened for pre-grouping clients", 2, RouteHandler::Search1d),
    route("/fwew-1d/r/{lang}/{local}", "search_1d_reverse_url", "reverse search, flattened", 2, RouteHandler::Search1dReverse),
    route("/search/{lang}/{words}", "search_bidirectional_url", "search either direction, Na'vi first", 2, RouteHandler::SearchBidirectional),
    // generation 3: name generation
    route("/name/single/{n}/{s}/{dialect}", "name_single_url", "generate single names", 3, RouteHandler::NameSingle),
    route("/name/full/{ending}/{n}/{s1}/{s2}/{s3}/{dialect}", "name_full_url", "generate full names", 3, RouteHandler::NameFull),
    route("/name/alu/{n}/{s}/{nm}/{am}/{dialect}", "name_alu_url", "generate 'X alu Y' names", 3, RouteHandler::NameAlu),
    // generation 4: word counts
    route("/total-words", "total_words_url", "dictionary size as an English sentence", 4, RouteHandler::TotalWords),
    route("/total-words/{lang}", "total_words_localized_url", "dictionary size as a localized sentence", 4, RouteHandler::TotalWordsLocalized),
    route("/word-count", "word_count_url", "dictionary size as a bare integer", 4, RouteHandler::WordCount),
    // generation 5: phonology reports and validity
    route("/homonyms", "homonyms_url", "entries sharing a spelling", 5, RouteHandler::Homonyms),
    route("/oddballs", "oddballs_url", "entries that break native phonotactics", 5, RouteHandler::Oddballs),
    route("/multi-ipa", "multi_ipa_url", "entries with multiple pronunciations", 5, RouteHandler::MultiIpa),
    route("/phonemes/{lang}", "phoneme_distros_url", "phoneme frequency report", 5, RouteHandler::PhonemeDistros),
    route("/valid/{lang}/{words}", "validity_url", "phonotactic validity of candidate words", 5, RouteHandler::Validity),
    // generation 6: discord-safe variants, reload, health
    route("/valid/d/{lang}/{words}", "validity_discord_url", "validity, capped for chat clients", 6, RouteHandler::ValidityDiscord),
    route("/name/single/d/{n}/{s}/{dialect}", "name_single_discord_url", "single names, capped for chat clients", 6, RouteHandler::NameSingleDiscord),
    route("/name/full/d/{ending}/{n}/{s1}/{s2}/{s3}/{dialect}", "name_full_discord_url", "full names, capped for chat clients", 6, RouteHandler::NameFullDiscord),
    route("/name/alu/d/{n}/{s}/{nm}/{am}/{dialect}", "name_alu_discord_url", "'X alu Y' names, capped for chat clients", 6, RouteHandler::NameAluDiscord),
    route("/update", "update_url", "reload the dictionary", 6, RouteHandler::Update),
    route("/health", "health_url", "service health", 6, RouteHandler::Health),
];

/// Convert a public `{param}` pattern to the axum `:param` form.
fn axum_pattern(pattern: &str) -> String {
    pattern
        .split('/')
        .map(|segment| {
            segment
                .strip_prefix('{')
                .and_then(|s| s.strip_suffix('}'))
                .map(|name| format!(":{}", name))
                .unwrap_or_else(|| segment.to_string())
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Mount path for a descriptor.
pub fn mount_path(pattern: &str) -> String {
    format!("/api{}", axum_pattern(pattern))
}

/// The self-describing endpoint catalog. Regenerated per request so a root
/// reconfiguration shows up without a restart; content is otherwise constant
/// per version.
pub fn catalog(web_root: &str) -> Value {
    let mut doc = serde_json::Map::new();
    for d in ROUTES {
        doc.insert(
            d.key.to_string(),
            json!({
                "url": format!("{}{}", web_root, d.pattern),
                "description": d.description,
                "min_api_version": d.min_version,
            }),
        );
    }
    Value::Object(doc)
}

fn method_router(handler: RouteHandler) -> MethodRouter<AppState> {
    match handler {
        RouteHandler::Catalog => get(meta::endpoints),
        RouteHandler::Search => get(search::search),
        RouteHandler::SearchReverse => get(search::search_reverse),
        RouteHandler::SearchSimple => get(search::search_simple),
        RouteHandler::Search1d => get(search::search_1d),
        RouteHandler::Search1dReverse => get(search::search_1d_reverse),
        RouteHandler::SearchBidirectional => get(search::search_bidirectional),
        RouteHandler::List => get(list::list_all),
        RouteHandler::ListFiltered => get(list::list_filtered),
        RouteHandler::Random => get(list::random),
        RouteHandler::RandomFiltered => get(list::random_filtered),
        RouteHandler::NumberToNavi => get(number::number_to_navi),
        RouteHandler::NaviToNumber => get(number::navi_to_number),
        RouteHandler::Lenition => get(phonology::lenition),
        RouteHandler::Version => get(meta::version),
        RouteHandler::NameSingle => get(names::name_single),
        RouteHandler::NameFull => get(names::name_full),
        RouteHandler::NameAlu => get(names::name_alu),
        RouteHandler::NameSingleDiscord => get(names::name_single_discord),
        RouteHandler::NameFullDiscord => get(names::name_full_discord),
        RouteHandler::NameAluDiscord => get(names::name_alu_discord),
        RouteHandler::TotalWords => get(meta::total_words),
        RouteHandler::TotalWordsLocalized => get(meta::total_words_localized),
        RouteHandler::WordCount => get(meta::word_count),
        RouteHandler::Homonyms => get(phonology::homonyms),
        RouteHandler::Oddballs => get(phonology::oddballs),
        RouteHandler::MultiIpa => get(phonology::multi_ipa),
        RouteHandler::PhonemeDistros => get(phonology::phoneme_distros),
        RouteHandler::Validity => get(phonology::validity),
        RouteHandler::ValidityDiscord => get(phonology::validity_discord),
        RouteHandler::Update => get(meta::update),
        RouteHandler::Health => get(meta::health),
    }
}

/// Build the application router: every published route, plus the open CORS
/// policy all generations have carried.
pub fn app(state: AppState) -> Router {
    let mut router = Router::new();
    for d in ROUTES {
        router = router.route(&mount_path(d.pattern), method_router(d.handler));
    }
    router
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_paths_match_mounted_patterns_byte_for_byte() {
        let root = "https://fwew.example/api";
        let doc = catalog(root);
        let doc = doc.as_object().unwrap();
        assert_eq!(doc.len(), ROUTES.len());

        for d in ROUTES {
            let entry = doc.get(d.key).unwrap_or_else(|| panic!("missing {}", d.key));
            let url = entry["url"].as_str().unwrap();
            let path = url.strip_prefix(root).unwrap();
            assert_eq!(path, d.pattern);
        }
    }

    #[test]
    fn patterns_are_additive_across_versions() {
        // versions only ever grow; every version from 1..=max is populated
        let max = ROUTES.iter().map(|d| d.min_version).max().unwrap();
        for v in 1..=max {
            assert!(
                ROUTES.iter().any(|d| d.min_version == v),
                "no routes introduced in version {}",
                v
            );
        }
    }

    #[test]
    fn axum_patterns_substitute_params() {
        assert_eq!(mount_path("/fwew/{nav}"), "/api/fwew/:nav");
        assert_eq!(
            mount_path("/fwew/r/{lang}/{local}"),
            "/api/fwew/r/:lang/:local"
        );
        assert_eq!(mount_path("/"), "/api/");
        assert_eq!(mount_path("/lenition"), "/api/lenition");
    }

    #[test]
    fn catalog_keys_are_unique() {
        let mut keys: Vec<&str> = ROUTES.iter().map(|d| d.key).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), ROUTES.len());
    }
}
