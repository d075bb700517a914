use crate::domain::model::CountryCode;
use url::Url;

pub const EMBED_ENDPOINT: &str =
    "https://searchtools.adoptapet.com/public/searchtools/display/pet-of-the-day";

pub const IFRAME_WIDTH: u32 = 199;
pub const IFRAME_HEIGHT: u32 = 361;
pub const BACKGROUND: &str = "tan";
pub const SIZE: &str = "tall";

/// Build the pet-of-the-day iframe URL. Query values are percent-encoded, so
/// the serialized URL only carries `&` as a pair separator.
pub fn embed_url(postal_code: &str, country: CountryCode) -> Url {
    let mut url = Url::parse(EMBED_ENDPOINT).expect("embed endpoint is a valid URL");
    url.query_pairs_mut()
        .append_pair("postal_code", postal_code)
        .append_pair("country_code", country.as_str())
        .append_pair("background", BACKGROUND)
        .append_pair("size", SIZE);
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embed_url_us() {
        let url = embed_url("90210", CountryCode::Us);
        assert_eq!(
            url.as_str(),
            "https://searchtools.adoptapet.com/public/searchtools/display/pet-of-the-day?postal_code=90210&country_code=US&background=tan&size=tall"
        );
    }

    #[test]
    fn test_embed_url_encodes_values() {
        let url = embed_url("K1A 0B1", CountryCode::Ca);
        assert!(url.as_str().contains("postal_code=K1A+0B1&country_code=CA"));

        let url = embed_url(r#""><script>&"#, CountryCode::Us);
        let serialized = url.as_str();
        assert!(!serialized.contains('"'));
        assert!(!serialized.contains('<'));
        assert!(serialized.contains("postal_code=%22%3E%3Cscript%3E%26&"));

        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(pairs[0], ("postal_code".to_string(), r#""><script>&"#.to_string()));
    }
}
