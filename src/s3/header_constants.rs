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

pub const IF_MATCH: &str = "If-Match";
pub const IF_NONE_MATCH: &str = "If-None-Match";
pub const IF_MODIFIED_SINCE: &str = "If-Modified-Since";
pub const IF_UNMODIFIED_SINCE: &str = "If-Unmodified-Since";
pub const CONTENT_MD5: &str = "Content-MD5";
pub const CONTENT_TYPE: &str = "Content-Type";
pub const CONTENT_LENGTH: &str = "Content-Length";
pub const CONTENT_DISPOSITION: &str = "Content-Disposition";
pub const CONTENT_ENCODING: &str = "Content-Encoding";
pub const CONTENT_LANGUAGE: &str = "Content-Language";
pub const CONTENT_RANGE: &str = "Content-Range";
pub const CACHE_CONTROL: &str = "Cache-Control";
pub const EXPIRES: &str = "Expires";
pub const ETAG: &str = "ETag";
pub const LAST_MODIFIED: &str = "Last-Modified";
pub const ACCEPT_RANGES: &str = "Accept-Ranges";
pub const LOCATION: &str = "Location";
pub const RANGE: &str = "Range";

pub const X_AMZ_META_PREFIX: &str = "x-amz-meta-";

pub const X_AMZ_ACL: &str = "x-amz-acl";
pub const X_AMZ_GRANT_FULL_CONTROL: &str = "x-amz-grant-full-control";
pub const X_AMZ_GRANT_READ: &str = "x-amz-grant-read";
pub const X_AMZ_GRANT_READ_ACP: &str = "x-amz-grant-read-acp";
pub const X_AMZ_GRANT_WRITE: &str = "x-amz-grant-write";
pub const X_AMZ_GRANT_WRITE_ACP: &str = "x-amz-grant-write-acp";

pub const X_AMZ_VERSION_ID: &str = "x-amz-version-id";
pub const X_AMZ_DELETE_MARKER: &str = "x-amz-delete-marker";
pub const X_AMZ_EXPIRATION: &str = "x-amz-expiration";
pub const X_AMZ_RESTORE: &str = "x-amz-restore";
pub const X_AMZ_RESTORE_OUTPUT_PATH: &str = "x-amz-restore-output-path";
pub const X_AMZ_MISSING_META: &str = "x-amz-missing-meta";
pub const X_AMZ_MP_PARTS_COUNT: &str = "x-amz-mp-parts-count";
pub const X_AMZ_TAGGING: &str = "x-amz-tagging";
pub const X_AMZ_TAGGING_COUNT: &str = "x-amz-tagging-count";
pub const X_AMZ_TAGGING_DIRECTIVE: &str = "x-amz-tagging-directive";
pub const X_AMZ_METADATA_DIRECTIVE: &str = "x-amz-metadata-directive";
pub const X_AMZ_STORAGE_CLASS: &str = "x-amz-storage-class";
pub const X_AMZ_WEBSITE_REDIRECT_LOCATION: &str = "x-amz-website-redirect-location";
pub const X_AMZ_REPLICATION_STATUS: &str = "x-amz-replication-status";
pub const X_AMZ_ABORT_DATE: &str = "x-amz-abort-date";
pub const X_AMZ_ABORT_RULE_ID: &str = "x-amz-abort-rule-id";

pub const X_AMZ_REQUEST_PAYER: &str = "x-amz-request-payer";
pub const X_AMZ_REQUEST_CHARGED: &str = "x-amz-request-charged";
pub const X_AMZ_EXPECTED_BUCKET_OWNER: &str = "x-amz-expected-bucket-owner";
pub const X_AMZ_MFA: &str = "x-amz-mfa";
pub const X_AMZ_BYPASS_GOVERNANCE_RETENTION: &str = "x-amz-bypass-governance-retention";

pub const X_AMZ_SERVER_SIDE_ENCRYPTION: &str = "x-amz-server-side-encryption";
pub const X_AMZ_SERVER_SIDE_ENCRYPTION_AWS_KMS_KEY_ID: &str =
    "x-amz-server-side-encryption-aws-kms-key-id";
pub const X_AMZ_SERVER_SIDE_ENCRYPTION_CONTEXT: &str = "x-amz-server-side-encryption-context";
pub const X_AMZ_SERVER_SIDE_ENCRYPTION_BUCKET_KEY_ENABLED: &str =
    "x-amz-server-side-encryption-bucket-key-enabled";
pub const X_AMZ_SERVER_SIDE_ENCRYPTION_CUSTOMER_ALGORITHM: &str =
    "x-amz-server-side-encryption-customer-algorithm";
pub const X_AMZ_SERVER_SIDE_ENCRYPTION_CUSTOMER_KEY: &str =
    "x-amz-server-side-encryption-customer-key";
pub const X_AMZ_SERVER_SIDE_ENCRYPTION_CUSTOMER_KEY_MD5: &str =
    "x-amz-server-side-encryption-customer-key-MD5";

pub const X_AMZ_COPY_SOURCE: &str = "x-amz-copy-source";
pub const X_AMZ_COPY_SOURCE_IF_MATCH: &str = "x-amz-copy-source-if-match";
pub const X_AMZ_COPY_SOURCE_IF_NONE_MATCH: &str = "x-amz-copy-source-if-none-match";
pub const X_AMZ_COPY_SOURCE_IF_UNMODIFIED_SINCE: &str = "x-amz-copy-source-if-unmodified-since";
pub const X_AMZ_COPY_SOURCE_IF_MODIFIED_SINCE: &str = "x-amz-copy-source-if-modified-since";
pub const X_AMZ_COPY_SOURCE_VERSION_ID: &str = "x-amz-copy-source-version-id";
pub const X_AMZ_COPY_SOURCE_SERVER_SIDE_ENCRYPTION_CUSTOMER_ALGORITHM: &str =
    "x-amz-copy-source-server-side-encryption-customer-algorithm";
pub const X_AMZ_COPY_SOURCE_SERVER_SIDE_ENCRYPTION_CUSTOMER_KEY: &str =
    "x-amz-copy-source-server-side-encryption-customer-key";
pub const X_AMZ_COPY_SOURCE_SERVER_SIDE_ENCRYPTION_CUSTOMER_KEY_MD5: &str =
    "x-amz-copy-source-server-side-encryption-customer-key-MD5";

pub const X_AMZ_OBJECT_LOCK_MODE: &str = "x-amz-object-lock-mode";
pub const X_AMZ_OBJECT_LOCK_RETAIN_UNTIL_DATE: &str = "x-amz-object-lock-retain-until-date";
pub const X_AMZ_OBJECT_LOCK_LEGAL_HOLD: &str = "x-amz-object-lock-legal-hold";
pub const X_AMZ_BUCKET_OBJECT_LOCK_ENABLED: &str = "x-amz-bucket-object-lock-enabled";
pub const X_AMZ_BUCKET_OBJECT_LOCK_TOKEN: &str = "x-amz-bucket-object-lock-token";
