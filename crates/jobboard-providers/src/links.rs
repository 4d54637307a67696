//! Dead link detection for the published data file.
//!
//! Postings go stale as employers fill roles. The checker probes each
//! `jobLink` with a HEAD request, drops postings whose link no longer
//! resolves and rewrites links that now redirect elsewhere.

use std::time::Duration;

use jobboard_types::JobRecord;

use crate::Result;

const MAX_LINK_LEN: usize = 500;

/// Tuning for a link check run
#[derive(Debug, Clone)]
pub struct LinkCheckOptions {
    /// Per-request timeout
    pub timeout: Duration,
    /// Pause after each probe so employer sites are not hammered
    pub pause: Duration,
}

impl Default for LinkCheckOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            pause: Duration::from_millis(500),
        }
    }
}

/// Outcome of probing a single link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkStatus {
    pub active: bool,
    /// URL after following redirects; the probed URL when the probe failed
    pub final_url: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinkCheckStats {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
    pub empty: usize,
    pub redirected: usize,
}

#[derive(Debug, Default)]
pub struct LinkCheckReport {
    /// Records to keep, with redirected links rewritten, in input order
    pub kept: Vec<JobRecord>,
    /// Records dropped for a dead or malformed link, in input order
    pub removed: Vec<JobRecord>,
    pub stats: LinkCheckStats,
}

pub struct LinkChecker {
    client: reqwest::Client,
    options: LinkCheckOptions,
}

impl LinkChecker {
    pub fn new(options: LinkCheckOptions) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(options.timeout)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()?;
        Ok(Self { client, options })
    }

    /// Probe one link, following redirects.
    ///
    /// Links without a scheme are probed over https. Any status below 400
    /// counts as active; transport errors count as inactive.
    pub async fn check(&self, link: &str) -> LinkStatus {
        let url = with_scheme(link);

        match self.client.head(&url).send().await {
            Ok(response) => LinkStatus {
                active: response.status().as_u16() < 400,
                final_url: response.url().to_string(),
            },
            Err(err) => {
                tracing::debug!("Probe of {} failed: {}", url, err);
                LinkStatus {
                    active: false,
                    final_url: url,
                }
            }
        }
    }

    /// Check every record's link and split the collection.
    ///
    /// Records without a link are kept untouched; the listing views already
    /// hide them.
    pub async fn check_records(&self, records: Vec<JobRecord>) -> LinkCheckReport {
        let mut report = LinkCheckReport::default();

        for mut record in records {
            report.stats.total += 1;
            let link = record.job_link.trim().to_string();

            if link.is_empty() {
                report.stats.empty += 1;
                report.kept.push(record);
                continue;
            }

            if is_malformed(&link) {
                tracing::warn!("Skipping malformed link: {}", truncate(&link, 100));
                report.stats.inactive += 1;
                report.removed.push(record);
                continue;
            }

            tracing::info!("Checking: {}", link);
            let status = self.check(&link).await;

            if status.active {
                report.stats.active += 1;
                if let Some(updated) = rewritten_link(&link, status.final_url) {
                    tracing::info!("Active (redirected to: {})", updated);
                    report.stats.redirected += 1;
                    record.job_link = updated;
                }
                report.kept.push(record);
            } else {
                tracing::warn!("Inactive link: {}", link);
                report.stats.inactive += 1;
                report.removed.push(record);
            }

            if !self.options.pause.is_zero() {
                tokio::time::sleep(self.options.pause).await;
            }
        }

        report
    }
}

fn with_scheme(link: &str) -> String {
    if link.starts_with("http://") || link.starts_with("https://") {
        link.to_string()
    } else {
        format!("https://{}", link)
    }
}

/// The link to store after a successful probe, when it differs from what
/// the record holds. A scheme-less link is replaced by its resolved URL.
fn rewritten_link(link: &str, final_url: String) -> Option<String> {
    (final_url != link).then_some(final_url)
}

/// Survey answers sometimes hold free text instead of a URL.
fn is_malformed(link: &str) -> bool {
    link.len() > MAX_LINK_LEN || link.chars().take(10).any(|c| c == ' ')
}

fn truncate(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_scheme() {
        assert_eq!(with_scheme("https://a.test/x"), "https://a.test/x");
        assert_eq!(with_scheme("http://a.test/x"), "http://a.test/x");
        assert_eq!(with_scheme("a.test/x"), "https://a.test/x");
    }

    #[test]
    fn test_rewritten_link() {
        assert_eq!(
            rewritten_link("https://a.test/x", "https://a.test/x".to_string()),
            None
        );
        assert_eq!(
            rewritten_link("https://a.test/x", "https://b.test/y".to_string()),
            Some("https://b.test/y".to_string())
        );
        // Stored without a scheme, resolved over https
        assert_eq!(
            rewritten_link("a.test/x", "https://a.test/x".to_string()),
            Some("https://a.test/x".to_string())
        );
    }

    #[test]
    fn test_is_malformed() {
        assert!(!is_malformed("https://a.test/jobs/1"));
        assert!(is_malformed("see our careers page"));
        assert!(is_malformed(&format!("https://a.test/{}", "x".repeat(500))));
        assert!(!is_malformed("https://a.test/some path later"));
    }
}
