// Copyright (c) 2024 The LocalAttest Project

//! The verified identity extracted from an assertion.

use la_attest_core::{
    AttributeFlags, ConfigId, ConfigSecurityVersion, CpuSecurityVersion, MiscSelect, MrEnclave,
    MrSigner, ProductId, ReportBody, SecurityVersion,
};
use la_util_encodings::Error as EncodingError;
use serde::{Deserialize, Serialize};

/// The identity of a peer context, produced only by a successful
/// verification.
///
/// Unlike a report body, whose attribute flags are authenticated as raw
/// bits, an extracted identity carries interpreted flags; what a given
/// identity is allowed to do is the caller's decision.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct EnclaveIdentity {
    /// The measurement of the peer's code
    pub mr_enclave: MrEnclave,
    /// The measurement of the key the peer was signed with
    pub mr_signer: MrSigner,
    /// The platform security version at the peer's launch
    pub cpu_svn: CpuSecurityVersion,
    /// The interpreted attribute flags of the peer
    pub attributes: AttributeFlags,
    /// The processor-feature state mask of the peer
    pub xfrm: u64,
    /// The extended information requested by the peer
    pub misc_select: MiscSelect,
    /// The configuration the peer was launched with
    pub config_id: ConfigId,
    /// The security version of the peer's configuration
    pub config_svn: ConfigSecurityVersion,
    /// The signer-assigned product ID of the peer
    pub isv_prod_id: ProductId,
    /// The signer-assigned security version of the peer
    pub isv_svn: SecurityVersion,
}

impl TryFrom<&ReportBody> for EnclaveIdentity {
    type Error = EncodingError;

    fn try_from(body: &ReportBody) -> Result<Self, Self::Error> {
        let attributes = AttributeFlags::from_bits(body.attributes.flags())
            .ok_or(EncodingError::InvalidInput)?;

        Ok(Self {
            mr_enclave: body.mr_enclave,
            mr_signer: body.mr_signer,
            cpu_svn: body.cpu_svn,
            attributes,
            xfrm: body.attributes.xfrm(),
            misc_select: body.misc_select,
            config_id: body.config_id,
            config_svn: body.config_svn,
            isv_prod_id: body.isv_prod_id,
            isv_svn: body.isv_svn,
        })
    }
}
