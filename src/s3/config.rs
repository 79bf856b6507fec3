// MinIO Rust Library for Amazon S3 Compatible Cloud Storage
// Copyright 2025 MinIO, Inc.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Addressing options used when an [`S3Request`](crate::s3::types::S3Request) is turned
//! into a host and path.

use typed_builder::TypedBuilder;

pub const DEFAULT_REGION: &str = "us-east-1";
pub const AWS_DOMAIN_SUFFIX: &str = "amazonaws.com";

const S3_PATH_STYLE_ACCESS: &str = "S3_PATH_STYLE_ACCESS";
const S3_ACCELERATE_MODE: &str = "S3_ACCELERATE_MODE";
const S3_DUALSTACK: &str = "S3_DUALSTACK";
const S3_REGION: &str = "S3_REGION";
const S3_ENDPOINT: &str = "S3_ENDPOINT";
const S3_USE_HTTPS: &str = "S3_USE_HTTPS";

/// How requests are addressed: endpoint host, path-style vs virtual-hosted-style,
/// transfer acceleration and dual-stack.
#[derive(Clone, Debug, PartialEq, Eq, TypedBuilder)]
pub struct S3ClientOptions {
    /// Always put the bucket in the path (`host/bucket/key`) instead of the host name.
    #[builder(default = false)]
    pub path_style_access: bool,

    /// Use the `s3-accelerate` endpoint.
    #[builder(default = false)]
    pub accelerate_mode: bool,

    /// Use the dual-stack (IPv4 and IPv6) endpoint.
    #[builder(default = false)]
    pub dualstack: bool,

    #[builder(default, setter(into, strip_option))]
    pub region: Option<String>,

    /// Custom endpoint host, e.g. `play.min.io:9000`; overrides the AWS host derivation.
    #[builder(default, setter(into, strip_option))]
    pub endpoint: Option<String>,

    #[builder(default = true)]
    pub https: bool,
}

impl Default for S3ClientOptions {
    fn default() -> Self {
        S3ClientOptions::builder().build()
    }
}

fn env_flag(name: &str) -> Option<bool> {
    let value = std::env::var(name).ok()?;
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        other => {
            log::warn!("ignoring {name}={other}: not a boolean");
            None
        }
    }
}

impl S3ClientOptions {
    /// Reads options from `S3_PATH_STYLE_ACCESS`, `S3_ACCELERATE_MODE`, `S3_DUALSTACK`,
    /// `S3_REGION`, `S3_ENDPOINT` and `S3_USE_HTTPS`. Unset variables keep their defaults.
    pub fn from_env() -> Self {
        let mut options = S3ClientOptions::default();
        if let Some(v) = env_flag(S3_PATH_STYLE_ACCESS) {
            options.path_style_access = v;
        }
        if let Some(v) = env_flag(S3_ACCELERATE_MODE) {
            options.accelerate_mode = v;
        }
        if let Some(v) = env_flag(S3_DUALSTACK) {
            options.dualstack = v;
        }
        if let Some(v) = env_flag(S3_USE_HTTPS) {
            options.https = v;
        }
        options.region = std::env::var(S3_REGION).ok().filter(|v| !v.is_empty());
        options.endpoint = std::env::var(S3_ENDPOINT).ok().filter(|v| !v.is_empty());
        log::debug!("S3 client options from environment: {options:?}");
        options
    }

    /// Region to address, falling back to `us-east-1`.
    pub fn region(&self) -> &str {
        self.region.as_deref().unwrap_or(DEFAULT_REGION)
    }

    /// Host name requests go to before any bucket prefix is applied.
    pub fn base_host(&self) -> String {
        if let Some(endpoint) = &self.endpoint {
            return endpoint.clone();
        }

        let mut host = String::new();
        if self.accelerate_mode {
            host.push_str("s3-accelerate.");
            if self.dualstack {
                host.push_str("dualstack.");
            }
        } else {
            host.push_str("s3.");
            if self.dualstack {
                host.push_str("dualstack.");
            }
            let region = self.region();
            if self.dualstack || region != DEFAULT_REGION {
                host.push_str(region);
                host.push('.');
            }
        }
        host.push_str(AWS_DOMAIN_SUFFIX);
        host
    }

    pub fn scheme(&self) -> &'static str {
        if self.https { "https" } else { "http" }
    }
}
