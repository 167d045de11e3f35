//! Payload formatting for the supported QR data types.
//!
//! Formatting is purely textual. Reserved characters (`;`, `:`, `,`, `"`, `\`)
//! inside Wi-Fi SSIDs or passwords are NOT escaped, and URLs, email addresses
//! and phone numbers are not validated. A network name such as `Cafe;Guest`
//! therefore produces a payload that some scanners will misread. This matches
//! the established behaviour of the tool and is kept on purpose.

use clap::ValueEnum;

const HTTP_PREFIX: &str = "http://";
const HTTPS_PREFIX: &str = "https://";
const MAILTO_PREFIX: &str = "mailto:";
const TEL_PREFIX: &str = "tel:";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum DataType {
    Url,
    #[default]
    Text,
    Email,
    Phone,
    Wifi,
}

impl DataType {
    /// Looks up a type by its lowercase tag.
    pub fn from_tag(tag: &str) -> Option<DataType> {
        <DataType as ValueEnum>::from_str(tag, false).ok()
    }
}

impl std::fmt::Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.to_possible_value() {
            Some(value) => f.write_str(value.get_name()),
            None => Ok(()),
        }
    }
}

/// Formats `data` into the payload string expected by QR readers for `data_type`.
pub fn format_data(data: &str, data_type: DataType) -> String {
    match data_type {
        DataType::Url => {
            if data.starts_with(HTTP_PREFIX) || data.starts_with(HTTPS_PREFIX) {
                data.to_string()
            } else {
                format!("{}{}", HTTPS_PREFIX, data)
            }
        }
        DataType::Email => with_prefix(data, MAILTO_PREFIX),
        DataType::Phone => with_prefix(data, TEL_PREFIX),
        DataType::Wifi => match data.split_once(':') {
            Some((ssid, password)) => format!("WIFI:T:WPA;S:{};P:{};;", ssid, password),
            None => format!("WIFI:T:nopass;S:{};;", data),
        },
        DataType::Text => data.to_string(),
    }
}

/// Like [`format_data`], but takes a free-form tag. Unknown tags are treated as text.
pub fn format_tagged(data: &str, tag: &str) -> String {
    format_data(data, DataType::from_tag(tag).unwrap_or_default())
}

fn with_prefix(data: &str, prefix: &str) -> String {
    if data.starts_with(prefix) {
        data.to_string()
    } else {
        format!("{}{}", prefix, data)
    }
}
