// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;
use vnicaas_api_types::attachment::{
    CreateInternalVnicAttachmentDetails, InternalVnicAttachment,
    UpdateVnicShapeDetails,
};
use vnicaas_api_types::migration::MigrationInfo;
use vnicaas_api_types::vtap::UpdateVtapDetails;
use vnicaas_api_types::ValidateEnums;

pub use vnicaas_api_types::UnsupportedEnumValue;

/// The record a payload file is decoded as.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Deserialize,
    strum::EnumString,
    strum::Display,
    strum::VariantArray,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum RecordKind {
    CreateInternalVnicAttachment,
    InternalVnicAttachment,
    MigrationInfo,
    UpdateVnicShape,
    UpdateVtap,
}

#[derive(Debug, Error)]
pub enum CheckError {
    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not a valid {kind} payload", .path.display())]
    Decode {
        path: PathBuf,
        kind: RecordKind,
        #[source]
        source: serde_json::Error,
    },
}

/// Result of checking a payload that decoded successfully.
#[derive(Debug, PartialEq)]
pub enum Outcome {
    Valid,
    Invalid(Vec<UnsupportedEnumValue>),
}

fn decode<T>(body: &str) -> Result<Outcome, serde_json::Error>
where
    T: DeserializeOwned + ValidateEnums,
{
    let record: T = serde_json::from_str(body)?;
    Ok(match record.validate_enums() {
        Ok(()) => Outcome::Valid,
        Err(e) => Outcome::Invalid(e.into_failures()),
    })
}

/// Decode `body` as a `kind` record and validate its enumerated fields.
pub fn check_str(
    kind: RecordKind,
    body: &str,
) -> Result<Outcome, serde_json::Error> {
    match kind {
        RecordKind::CreateInternalVnicAttachment => {
            decode::<CreateInternalVnicAttachmentDetails>(body)
        }
        RecordKind::InternalVnicAttachment => {
            decode::<InternalVnicAttachment>(body)
        }
        RecordKind::MigrationInfo => decode::<MigrationInfo>(body),
        RecordKind::UpdateVnicShape => decode::<UpdateVnicShapeDetails>(body),
        RecordKind::UpdateVtap => decode::<UpdateVtapDetails>(body),
    }
}

pub fn check_file(kind: RecordKind, path: &Path) -> Result<Outcome, CheckError> {
    let body = std::fs::read_to_string(path)
        .map_err(|source| CheckError::Read { path: path.to_owned(), source })?;
    check_str(kind, &body).map_err(|source| CheckError::Decode {
        path: path.to_owned(),
        kind,
        source,
    })
}
