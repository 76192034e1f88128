//! Google Tag Manager snippets.
//!
//! `head_script` goes into a `<script>` in the document head, `noscript`
//! right after the opening `<body>`.

/// Container ID usable inside the quoted JS string and the iframe URL.
fn sanitize(id: &str) -> String {
    id.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .collect()
}

/// Loader script body for the container `id`.
pub fn head_script(id: &str) -> String {
    let id = sanitize(id);
    format!(
        "(function(w,d,s,l,i){{w[l]=w[l]||[];w[l].push({{'gtm.start':\
new Date().getTime(),event:'gtm.js'}});var f=d.getElementsByTagName(s)[0],\
j=d.createElement(s),dl=l!='dataLayer'?'&l='+l:'';j.async=true;j.src=\
'https://www.googletagmanager.com/gtm.js?id='+i+dl;f.parentNode.insertBefore(j,f);\
}})(window,document,'script','dataLayer','{id}');"
    )
}

/// Fallback iframe for visitors without JavaScript.
pub fn noscript(id: &str) -> String {
    let id = sanitize(id);
    format!(
        "<iframe src=\"https://www.googletagmanager.com/ns.html?id={id}\" \
height=\"0\" width=\"0\" style=\"display:none;visibility:hidden\"></iframe>"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn head_script_targets_container() {
        let script = head_script("GTM-ABC123");
        assert!(script.starts_with("(function(w,d,s,l,i){"));
        assert!(script.ends_with("(window,document,'script','dataLayer','GTM-ABC123');"));
        assert!(script.contains("googletagmanager.com/gtm.js?id="));
    }

    #[test]
    fn noscript_iframe() {
        assert_eq!(
            noscript("GTM-ABC123"),
            "<iframe src=\"https://www.googletagmanager.com/ns.html?id=GTM-ABC123\" \
height=\"0\" width=\"0\" style=\"display:none;visibility:hidden\"></iframe>"
        );
    }

    #[test]
    fn strips_injection_attempts() {
        let script = head_script("GTM-1');alert('x");
        assert!(script.ends_with("'dataLayer','GTM-1alertx');"));
        assert!(!noscript("\"><script>").contains("<script>"));
    }
}
