//! The authentication, client and version header every request carries.

use chrono::{DateTime, Local, SecondsFormat, TimeZone};

use crate::config::Credentials;
use crate::request::errors::OperationFamily;
use crate::xml::{XmlError, XmlWriter};

/// The fixed facts about one carrier operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OperationSpec {
    /// Short name used in logs.
    pub name: &'static str,
    /// Request document root element.
    pub root: &'static str,
    /// Namespace segment, as in `http://fedex.com/ws/<namespace>/v<major>`.
    pub namespace: &'static str,
    /// Version block service id.
    pub service_id: &'static str,
    /// Version block major number.
    pub major: u32,
    /// Top-level key of a successful reply.
    pub reply_key: &'static str,
    /// Error family for failures.
    pub family: OperationFamily,
}

impl OperationSpec {
    /// Returns the root element namespace URI.
    #[must_use]
    pub fn namespace_uri(&self) -> String {
        format!("http://fedex.com/ws/{}/v{}", self.namespace, self.major)
    }
}

/// Client localization block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Localization {
    pub language_code: &'static str,
    pub locale_code: &'static str,
}

/// US English.
pub const EN_US: Localization = Localization {
    language_code: "en",
    locale_code: "us",
};

/// Writes `WebAuthenticationDetail`.
pub fn add_authentication(w: &mut XmlWriter, credentials: &Credentials) -> Result<(), XmlError> {
    w.element("WebAuthenticationDetail", |w| {
        w.element("UserCredential", |w| {
            w.text("Key", credentials.key().as_ref())?;
            w.text("Password", credentials.password().as_ref())
        })
    })
}

/// Writes `ClientDetail`, with a `Localization` block if given.
pub fn add_client_detail(
    w: &mut XmlWriter,
    credentials: &Credentials,
    localization: Option<Localization>,
) -> Result<(), XmlError> {
    w.element("ClientDetail", |w| {
        w.text("AccountNumber", credentials.account_number().as_ref())?;
        w.text("MeterNumber", credentials.meter().as_ref())?;
        if let Some(l) = localization {
            w.element("Localization", |w| {
                w.text("LanguageCode", l.language_code)?;
                w.text("LocaleCode", l.locale_code)
            })?;
        }
        Ok(())
    })
}

/// Writes `Version`. Intermediate and minor are always zero.
pub fn add_version(w: &mut XmlWriter, service_id: &str, major: u32) -> Result<(), XmlError> {
    w.element("Version", |w| {
        w.text("ServiceId", service_id)?;
        w.text("Major", major)?;
        w.text("Intermediate", 0)?;
        w.text("Minor", 0)
    })
}

/// Writes `RequestTimestamp` for the given instant.
pub fn add_timestamp_at<Tz: TimeZone>(w: &mut XmlWriter, at: &DateTime<Tz>) -> Result<(), XmlError>
where
    Tz::Offset: std::fmt::Display,
{
    w.text(
        "RequestTimestamp",
        at.to_rfc3339_opts(SecondsFormat::Secs, false),
    )
}

/// Writes `RequestTimestamp` for the current local time.
pub fn add_timestamp(w: &mut XmlWriter) -> Result<(), XmlError> {
    add_timestamp_at(w, &Local::now())
}

/// Writes the full envelope: authentication, client detail and version.
pub fn add_envelope(
    w: &mut XmlWriter,
    credentials: &Credentials,
    spec: &OperationSpec,
    localization: Option<Localization>,
) -> Result<(), XmlError> {
    add_authentication(w, credentials)?;
    add_client_detail(w, credentials, localization)?;
    add_version(w, spec.service_id, spec.major)
}
