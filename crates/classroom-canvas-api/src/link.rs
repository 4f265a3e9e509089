//! `Link` header handling.

use reqwest::Url;

use crate::errors::CanvasApiError;

/// Extract the `rel="next"` target from a `Link` header value.
pub fn next_page_url(link_header: &str) -> Option<String> {
    link_header.split(',').find_map(|link| {
        let mut parts = link.split(';');
        let target = parts.next()?.trim();
        let is_next = parts.any(|param| {
            matches!(
                param.trim().split_once('='),
                Some((key, value)) if key.trim() == "rel" && value.trim().trim_matches('"') == "next"
            )
        });

        if is_next {
            target
                .strip_prefix('<')?
                .strip_suffix('>')
                .map(ToOwned::to_owned)
        } else {
            None
        }
    })
}

/// Resolve the page following the current one, if any.
///
/// Credentials are only ever sent to the origin of `current`: a `next` link
/// pointing anywhere else is rejected.
pub fn next_page_link(
    link_header: Option<&str>,
    current: &Url,
) -> Result<Option<Url>, CanvasApiError> {
    let Some(target) = link_header.and_then(next_page_url) else {
        return Ok(None);
    };

    let url = Url::parse(&target).map_err(|_| CanvasApiError::InvalidUrl {
        url: target.clone(),
    })?;
    if url.origin() != current.origin() {
        return Err(CanvasApiError::ForeignNextLink { url: target });
    }

    Ok(Some(url))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn next_link_in_canvas_header() {
        let header = concat!(
            r#"<https://canvas.example.edu/api/v1/courses/1/users?page=2&per_page=100>; rel="current","#,
            r#"<https://canvas.example.edu/api/v1/courses/1/users?page=3&per_page=100>; rel="next","#,
            r#"<https://canvas.example.edu/api/v1/courses/1/users?page=1&per_page=100>; rel="first","#,
            r#"<https://canvas.example.edu/api/v1/courses/1/users?page=5&per_page=100>; rel="last""#,
        );

        assert_eq!(
            next_page_url(header).as_deref(),
            Some("https://canvas.example.edu/api/v1/courses/1/users?page=3&per_page=100")
        );
    }

    #[test]
    fn last_page_has_no_next_link() {
        let header = concat!(
            r#"<https://canvas.example.edu/api/v1/courses/1/users?page=5>; rel="current", "#,
            r#"<https://canvas.example.edu/api/v1/courses/1/users?page=1>; rel="first""#,
        );

        assert_eq!(next_page_url(header), None);
    }

    #[test]
    fn unquoted_relation() {
        assert_eq!(
            next_page_url("<https://canvas.example.edu/next>; rel=next").as_deref(),
            Some("https://canvas.example.edu/next")
        );
    }

    #[test]
    fn malformed_header() {
        assert_eq!(next_page_url(""), None);
        assert_eq!(next_page_url(r#"https://no-brackets; rel="next""#), None);
    }

    fn first_page() -> Url {
        Url::parse("https://canvas.example.edu/api/v1/courses/1/users?per_page=100").unwrap()
    }

    #[test]
    fn next_link_on_same_origin() {
        let header = r#"<https://canvas.example.edu/api/v1/courses/1/users?page=2>; rel="next""#;

        assert_eq!(
            next_page_link(Some(header), &first_page())
                .unwrap()
                .map(|url| url.to_string()),
            Some("https://canvas.example.edu/api/v1/courses/1/users?page=2".to_string())
        );
    }

    #[test]
    fn no_next_link() {
        assert_eq!(next_page_link(None, &first_page()).unwrap(), None);
        assert_eq!(
            next_page_link(
                Some(r#"<https://canvas.example.edu/x>; rel="last""#),
                &first_page()
            )
            .unwrap(),
            None
        );
    }

    #[test]
    fn next_link_to_another_host_is_rejected() {
        for target in [
            "https://attacker.example.com/api/v1/courses/1/users?page=2",
            "http://canvas.example.edu/api/v1/courses/1/users?page=2",
            "https://canvas.example.edu:8443/api/v1/courses/1/users?page=2",
        ] {
            let header = format!(r#"<{target}>; rel="next""#);

            assert!(
                matches!(
                    next_page_link(Some(&header), &first_page()),
                    Err(CanvasApiError::ForeignNextLink { url }) if url == target
                ),
                "{target}"
            );
        }
    }

    #[test]
    fn unparsable_next_link() {
        assert!(matches!(
            next_page_link(Some(r#"<not a url>; rel="next""#), &first_page()),
            Err(CanvasApiError::InvalidUrl { .. })
        ));
    }
}
