use serde::{Deserialize, Serialize};
use url::Url;

use crate::models::NewSite;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Site creation payload. Everything is optional at the serde level so
/// `validate` can report all missing/invalid fields in one 400 response
/// instead of failing on the first.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateSiteRequest {
    pub name: Option<String>,
    pub url: Option<String>,
    pub wp_cli_path: Option<String>,
    pub ssh_host: Option<String>,
    pub ssh_user: Option<String>,
    pub ssh_key: Option<String>,
    pub pages_to_scan: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl CreateSiteRequest {
    pub fn validate(self) -> Result<NewSite, Vec<FieldError>> {
        let mut errors = Vec::new();

        let name = match self.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => Some(name.to_string()),
            _ => {
                errors.push(FieldError {
                    field: "name",
                    message: "name is required".into(),
                });
                None
            }
        };

        let url = match self.url.as_deref() {
            Some(raw) => match Url::parse(raw) {
                Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => {
                    Some(raw.to_string())
                }
                Ok(_) => {
                    errors.push(FieldError {
                        field: "url",
                        message: "url must use http or https".into(),
                    });
                    None
                }
                Err(_) => {
                    errors.push(FieldError {
                        field: "url",
                        message: "url is not a valid URL".into(),
                    });
                    None
                }
            },
            None => {
                errors.push(FieldError {
                    field: "url",
                    message: "url is required".into(),
                });
                None
            }
        };

        let pages_to_scan = self.pages_to_scan.unwrap_or_default();
        if pages_to_scan.iter().any(|page| !page.starts_with('/')) {
            errors.push(FieldError {
                field: "pagesToScan",
                message: "every page path must start with /".into(),
            });
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(NewSite {
            name: name.unwrap_or_default(),
            url: url.unwrap_or_default(),
            wp_cli_path: self.wp_cli_path,
            ssh_host: self.ssh_host,
            ssh_user: self.ssh_user,
            ssh_key: self.ssh_key,
            pages_to_scan,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct GenerateReportRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogsQuery {
    pub site_id: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_payload_produces_new_site() {
        let req = CreateSiteRequest {
            name: Some("Shop".into()),
            url: Some("https://shop.example.com".into()),
            pages_to_scan: Some(vec!["/".into(), "/cart".into()]),
            ..Default::default()
        };
        let new = req.validate().unwrap();
        assert_eq!(new.name, "Shop");
        assert_eq!(new.pages_to_scan.len(), 2);
    }

    #[test]
    fn all_violations_are_reported_together() {
        let req = CreateSiteRequest {
            url: Some("not a url".into()),
            pages_to_scan: Some(vec!["shop".into()]),
            ..Default::default()
        };
        let errors = req.validate().unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, ["name", "url", "pagesToScan"]);
    }

    #[test]
    fn non_http_schemes_are_rejected() {
        let req = CreateSiteRequest {
            name: Some("Ftp".into()),
            url: Some("ftp://example.com".into()),
            ..Default::default()
        };
        assert!(req.validate().is_err());
    }
}
