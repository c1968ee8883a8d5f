pub const FRAME_ANCESTORS_NONE: &str = "frame-ancestors 'none'";

const DIRECTIVES_BEFORE_FRAME_ANCESTORS: [&str; 3] =
    ["default-src 'self'", "base-uri 'none'", "object-src 'none'"];
// inline scripts stay blocked regardless of configuration, the control UI only needs inline styles
const DIRECTIVES_AFTER_FRAME_ANCESTORS: [&str; 5] = [
    "script-src 'self'",
    "style-src 'self' 'unsafe-inline' https://fonts.googleapis.com",
    "img-src 'self' data: https:",
    "font-src 'self' https://fonts.gstatic.com",
    "connect-src 'self' ws: wss:",
];

/// Splits a comma and/or whitespace separated origin list, keeping the given order.
pub fn parse_origin_list(value: &str) -> Vec<&str> {
    value
        .split(|c: char| c.is_whitespace() || c == ',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .collect()
}

pub fn resolve_frame_ancestors(allowed_frame_ancestors: Option<&str>) -> String {
    let origins = allowed_frame_ancestors
        .map(parse_origin_list)
        .unwrap_or_default();

    if origins.is_empty() {
        String::from(FRAME_ANCESTORS_NONE)
    } else {
        format!("frame-ancestors {}", origins.join(" "))
    }
}

/// Builds the `Content-Security-Policy` value for the control UI.
///
/// Framing is denied unless `allowed_frame_ancestors` names at least one origin.
pub fn build_control_ui_csp_header(allowed_frame_ancestors: Option<&str>) -> String {
    let frame_ancestors = resolve_frame_ancestors(allowed_frame_ancestors);
    let mut directives = Vec::with_capacity(
        DIRECTIVES_BEFORE_FRAME_ANCESTORS.len() + 1 + DIRECTIVES_AFTER_FRAME_ANCESTORS.len(),
    );

    directives.extend_from_slice(&DIRECTIVES_BEFORE_FRAME_ANCESTORS);
    directives.push(frame_ancestors.as_str());
    directives.extend_from_slice(&DIRECTIVES_AFTER_FRAME_ANCESTORS);

    directives.join("; ")
}

#[cfg(test)]
mod tests {
    use crate::utilities::content_security_policy::{
        FRAME_ANCESTORS_NONE, build_control_ui_csp_header, parse_origin_list,
        resolve_frame_ancestors,
    };

    #[test]
    fn blocks_inline_scripts_while_allowing_inline_styles() {
        let csp = build_control_ui_csp_header(None);

        assert!(csp.contains(FRAME_ANCESTORS_NONE));
        assert!(csp.contains("script-src 'self'"));
        assert!(!csp.contains("script-src 'self' 'unsafe-inline'"));
        assert!(csp.contains("style-src 'self' 'unsafe-inline'"));
    }

    #[test]
    fn full_header_default() {
        assert_eq!(
            build_control_ui_csp_header(None),
            "default-src 'self'; base-uri 'none'; object-src 'none'; frame-ancestors 'none'; script-src 'self'; style-src 'self' 'unsafe-inline' https://fonts.googleapis.com; img-src 'self' data: https:; font-src 'self' https://fonts.gstatic.com; connect-src 'self' ws: wss:"
        );
    }

    #[test]
    fn configurable_frame_ancestors() {
        let csp = build_control_ui_csp_header(Some(
            "https://*.vercel.app https://devs.ai http://localhost:3000",
        ));

        assert!(!csp.contains(FRAME_ANCESTORS_NONE));
        assert!(csp.contains(
            "frame-ancestors https://*.vercel.app https://devs.ai http://localhost:3000"
        ));
    }

    #[test]
    fn mixed_separators_collapse() {
        assert_eq!(
            resolve_frame_ancestors(Some(
                "https://a.example http://b.example,https://c.example"
            )),
            "frame-ancestors https://a.example http://b.example https://c.example"
        );
        assert_eq!(
            resolve_frame_ancestors(Some(" ,https://a.example ,, \t\nhttps://b.example, ")),
            "frame-ancestors https://a.example https://b.example"
        );
    }

    #[test]
    fn blank_values_deny_framing() {
        for value in [None, Some(""), Some("  "), Some("\t\n"), Some(",, ,")] {
            assert_eq!(resolve_frame_ancestors(value), FRAME_ANCESTORS_NONE);
            assert!(build_control_ui_csp_header(value).contains(FRAME_ANCESTORS_NONE));
        }
    }

    #[test]
    fn directive_order_is_fixed() {
        let csp = build_control_ui_csp_header(Some("https://a.example"));
        let names: Vec<&str> = csp
            .split("; ")
            .filter_map(|directive| directive.split(' ').next())
            .collect();

        assert_eq!(
            names,
            [
                "default-src",
                "base-uri",
                "object-src",
                "frame-ancestors",
                "script-src",
                "style-src",
                "img-src",
                "font-src",
                "connect-src"
            ]
        );
    }

    #[test]
    fn origin_list_keeps_order() {
        assert_eq!(
            parse_origin_list("https://z.example,https://a.example https://m.example"),
            ["https://z.example", "https://a.example", "https://m.example"]
        );
        assert!(parse_origin_list("").is_empty());
    }
}
