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

//! String-backed enumerations.
//!
//! Each enum holds the values known when this crate was written plus an
//! `Unknown(String)` variant for anything else the service may send. A value
//! built from a string and the same value built from the constant are
//! indistinguishable: equality, hashing, rendering and serialization all go
//! through [`as_str`](StorageClass::as_str).

use super::traits::ShapeValue;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::convert::Infallible;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $value:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// A value not known to this version of the crate.
            Unknown(String),
        }

        impl $name {
            /// Wire form of the value.
            pub fn as_str(&self) -> &str {
                match self {
                    $( $name::$variant => $value, )+
                    $name::Unknown(v) => v.as_str(),
                }
            }

            /// Wire forms of all known values.
            pub fn values() -> &'static [&'static str] {
                &[$( $value ),+]
            }

            pub fn is_known(&self) -> bool {
                Self::values().contains(&self.as_str())
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                match s {
                    $( $value => $name::$variant, )+
                    other => {
                        log::debug!("unknown {} value: {other}", stringify!($name));
                        $name::Unknown(other.to_string())
                    }
                }
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                $name::from(s.as_str())
            }
        }

        impl From<&String> for $name {
            fn from(s: &String) -> Self {
                $name::from(s.as_str())
            }
        }

        impl From<$name> for String {
            fn from(v: $name) -> String {
                match v {
                    $name::Unknown(s) => s,
                    known => known.as_str().to_string(),
                }
            }
        }

        impl FromStr for $name {
            type Err = Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok($name::from(s))
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.as_str() == other.as_str()
            }
        }

        impl Eq for $name {}

        impl Hash for $name {
            fn hash<H: Hasher>(&self, state: &mut H) {
                self.as_str().hash(state);
            }
        }

        impl ShapeValue for $name {
            fn fmt_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                Ok($name::from(String::deserialize(deserializer)?))
            }
        }
    };
}

string_enum! {
    /// Storage class of an object.
    StorageClass {
        Standard => "STANDARD",
        ReducedRedundancy => "REDUCED_REDUNDANCY",
        StandardIa => "STANDARD_IA",
        OnezoneIa => "ONEZONE_IA",
        IntelligentTiering => "INTELLIGENT_TIERING",
        Glacier => "GLACIER",
        DeepArchive => "DEEP_ARCHIVE",
    }
}

string_enum! {
    /// Server-side encryption algorithm.
    ServerSideEncryption {
        Aes256 => "AES256",
        AwsKms => "aws:kms",
    }
}

string_enum! {
    /// Canned ACL applied to an object.
    ObjectCannedAcl {
        Private => "private",
        PublicRead => "public-read",
        PublicReadWrite => "public-read-write",
        AuthenticatedRead => "authenticated-read",
        AwsExecRead => "aws-exec-read",
        BucketOwnerRead => "bucket-owner-read",
        BucketOwnerFullControl => "bucket-owner-full-control",
    }
}

string_enum! {
    /// Canned ACL applied to a bucket.
    BucketCannedAcl {
        Private => "private",
        PublicRead => "public-read",
        PublicReadWrite => "public-read-write",
        AuthenticatedRead => "authenticated-read",
    }
}

string_enum! {
    /// Confirms the requester knows they will be charged for the request.
    RequestPayer {
        Requester => "requester",
    }
}

string_enum! {
    /// Set in responses when the requester was charged.
    RequestCharged {
        Requester => "requester",
    }
}

string_enum! {
    /// Whether a copy keeps the source metadata or replaces it.
    MetadataDirective {
        Copy => "COPY",
        Replace => "REPLACE",
    }
}

string_enum! {
    /// Whether a copy keeps the source tags or replaces them.
    TaggingDirective {
        Copy => "COPY",
        Replace => "REPLACE",
    }
}

string_enum! {
    ObjectLockMode {
        Governance => "GOVERNANCE",
        Compliance => "COMPLIANCE",
    }
}

string_enum! {
    /// Retention mode of a bucket's default object lock rule.
    ObjectLockRetentionMode {
        Governance => "GOVERNANCE",
        Compliance => "COMPLIANCE",
    }
}

string_enum! {
    ObjectLockLegalHoldStatus {
        On => "ON",
        Off => "OFF",
    }
}

string_enum! {
    ObjectLockEnabled {
        Enabled => "Enabled",
    }
}

string_enum! {
    /// Cross-region replication state of an object.
    ReplicationStatus {
        Complete => "COMPLETE",
        Pending => "PENDING",
        Failed => "FAILED",
        Replica => "REPLICA",
    }
}

string_enum! {
    /// Permission granted by an ACL grant.
    Permission {
        FullControl => "FULL_CONTROL",
        Write => "WRITE",
        WriteAcp => "WRITE_ACP",
        Read => "READ",
        ReadAcp => "READ_ACP",
    }
}

string_enum! {
    /// Kind of grantee in an ACL grant; sent as the `xsi:type` attribute.
    GranteeType {
        CanonicalUser => "CanonicalUser",
        AmazonCustomerByEmail => "AmazonCustomerByEmail",
        Group => "Group",
    }
}

string_enum! {
    /// Encoding applied to keys in listing responses.
    EncodingType {
        Url => "url",
    }
}

string_enum! {
    Protocol {
        Http => "http",
        Https => "https",
    }
}

string_enum! {
    /// Retrieval tier of a restore job.
    Tier {
        Standard => "Standard",
        Bulk => "Bulk",
        Expedited => "Expedited",
    }
}

string_enum! {
    /// Region a bucket is created in.
    BucketLocationConstraint {
        Eu => "EU",
        EuWest1 => "eu-west-1",
        EuCentral1 => "eu-central-1",
        UsWest1 => "us-west-1",
        UsWest2 => "us-west-2",
        ApSouth1 => "ap-south-1",
        ApSoutheast1 => "ap-southeast-1",
        ApSoutheast2 => "ap-southeast-2",
        ApNortheast1 => "ap-northeast-1",
        SaEast1 => "sa-east-1",
        CnNorth1 => "cn-north-1",
    }
}
