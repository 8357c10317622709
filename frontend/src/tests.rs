#[cfg(test)]
mod tests {
    use crate::api::{ApiClient, ApiError, HttpMethod};
    use crate::config::{resolver_from, AppConfig};
    use crate::i18n::I18n;
    use crate::Route;
    use pretty_assertions::assert_eq;
    use shared::{EndpointResolver, I18nOptions, LOCAL_BASE_URL, PUBLIC_BASE_URL};
    use yew_router::Routable;

    // Route table tests
    #[test]
    fn test_route_paths() {
        let expected = [
            (Route::Home, "/"),
            (Route::Items, "/items"),
            (Route::Login, "/login"),
            (Route::Register, "/register"),
            (Route::Profile, "/profile"),
            (Route::Users, "/users"),
            (Route::Categories, "/categories"),
            (Route::Settings, "/settings"),
            (Route::Display, "/display"),
            (Route::Widget, "/widget"),
            (Route::Schedules, "/schedules"),
            (Route::NotFound, "/404"),
        ];

        for (route, path) in expected {
            assert_eq!(route.to_path(), path);
            assert_eq!(Route::recognize(path), Some(route));
        }
    }

    #[test]
    fn test_not_found_route() {
        assert_eq!(Route::not_found_route(), Some(Route::NotFound));
        assert!(!Route::nav_items().contains(&Route::NotFound));
    }

    // i18n tests
    #[test]
    fn test_bundled_messages_cover_every_route() {
        let i18n = I18n::bundled().unwrap();
        assert_eq!(i18n.locale(), "en");

        for route in Route::nav_items() {
            let key = route.title_key();
            assert_ne!(i18n.t(key), key, "missing message for {}", key);
        }
        assert_eq!(i18n.t(Route::NotFound.title_key()), "404 - Page Not Found");
    }

    #[test]
    fn test_switching_locale_falls_back_to_english() {
        let ru = I18n::bundled().unwrap().with_locale("ru");
        assert_eq!(ru.locale(), "ru");
        assert_eq!(ru.t("nav.home"), "Главная");
        // Not translated, so the English text is used.
        assert_eq!(ru.t("not_found.body"), "The page you're looking for doesn't exist.");
    }

    #[test]
    fn test_interpolated_messages() {
        let i18n = I18n::bundled().unwrap();
        assert_eq!(
            i18n.t_with("footer.backend", &[("url", LOCAL_BASE_URL)]),
            "Backend: http://10.10.0.100:8887"
        );
    }

    #[test]
    fn test_load_rejects_missing_fallback() {
        let options = I18nOptions {
            locale: "en".to_string(),
            fallback_locale: "de".to_string(),
        };
        assert!(I18n::load(r#"{"en": {}}"#, options).is_err());
    }

    // Endpoint configuration tests
    #[test]
    fn test_config_for_hosts() {
        let resolver = EndpointResolver::standard();
        let cases = [
            ("10.10.0.5", LOCAL_BASE_URL),
            ("localhost", LOCAL_BASE_URL),
            ("example.com", PUBLIC_BASE_URL),
            ("10.10.", LOCAL_BASE_URL),
            ("110.10.0.1", PUBLIC_BASE_URL),
        ];

        for (host, expected) in cases {
            let config = AppConfig::with_resolver(&resolver, host);
            assert_eq!(config.host, host);
            assert_eq!(config.api_base_url, expected);
        }
    }

    #[test]
    fn test_resolver_override() {
        assert_eq!(resolver_from(None), EndpointResolver::standard());
        assert_eq!(resolver_from(Some("   ")), EndpointResolver::standard());
        assert_eq!(resolver_from(Some("not json")), EndpointResolver::standard());

        let staging = resolver_from(Some(
            r#"{"rules":[{"matcher":{"exact":"staging.local"},"base_url":"http://10.10.0.200:8887"}],"fallback":"https://api.example.com"}"#,
        ));
        assert_eq!(staging.resolve("staging.local"), "http://10.10.0.200:8887");
        assert_eq!(staging.resolve("localhost"), "https://api.example.com");
    }

    // API client tests
    #[test]
    fn test_api_client_prefixes_paths() {
        let config = AppConfig::with_resolver(&EndpointResolver::standard(), "localhost");
        let client = ApiClient::from_config(&config);

        assert_eq!(client.base_url(), LOCAL_BASE_URL);
        assert_eq!(client.url("/api/items"), "http://10.10.0.100:8887/api/items");
        assert_eq!(client.url("settings"), "http://10.10.0.100:8887/settings");
    }

    #[test]
    fn test_api_client_relative_mode() {
        let client = ApiClient::new("");
        assert_eq!(client.url("/api/items"), "/api/items");
    }

    #[test]
    fn test_http_method_parsing() {
        let cases = [
            ("GET", HttpMethod::Get),
            ("post", HttpMethod::Post),
            ("Put", HttpMethod::Put),
            ("PATCH", HttpMethod::Patch),
            ("delete", HttpMethod::Delete),
        ];

        for (raw, expected) in cases {
            let method: HttpMethod = raw.parse().unwrap();
            assert_eq!(method, expected);
            assert_eq!(method.as_str(), raw.to_uppercase());
        }
    }

    #[test]
    fn test_unknown_http_method_is_rejected() {
        for raw in ["HEAD", "OPTIONS", "GTE", ""] {
            assert_eq!(
                raw.parse::<HttpMethod>(),
                Err(ApiError::UnsupportedMethod(raw.to_string()))
            );
        }
    }
}
