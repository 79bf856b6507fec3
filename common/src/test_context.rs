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

use crate::utils::{init_logger, rand_bucket_name};
use s3_model::s3::S3ClientOptions;

/// Client options plus a fresh bucket name for one test.
#[derive(Clone, Debug)]
pub struct TestContext {
    pub options: S3ClientOptions,
    pub bucket: String,
}

impl TestContext {
    /// Reads the options from `S3_*` environment variables, falling back to defaults.
    pub fn new_from_env() -> Self {
        init_logger();
        let options = S3ClientOptions::from_env();
        log::debug!("test options: {options:?}");
        TestContext {
            options,
            bucket: rand_bucket_name(),
        }
    }

    /// Path-style options against a local endpoint, as used with MinIO.
    pub fn local() -> Self {
        init_logger();
        TestContext {
            options: S3ClientOptions::builder()
                .path_style_access(true)
                .endpoint("localhost:9000")
                .https(false)
                .build(),
            bucket: rand_bucket_name(),
        }
    }
}
