#![no_std]

use soroban_sdk::{contracterror, contracttype, Address, Bytes, String};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    NotAuthorized = 100,
    InvalidDrugId = 101,
    InvalidSeverity = 102,
    InvalidDescription = 103,
    InvalidHash = 104,
    ReportAlreadyExists = 106,
    ReportNotFound = 107,
    InvalidLocation = 110,
    AuthorityNotSet = 111,
    InvalidMetadata = 113,
    InvalidAnonymousId = 114,
    ReportCountExceeded = 115,
}

/// Review state of a report. Only verified authorities may move a report
/// out of `Pending`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ReportStatus {
    Pending,
    Verified,
    Rejected,
}

/// An anonymous adverse-drug report.
///
/// `submitter` is fixed at creation; amendments only touch description,
/// severity and timestamp.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Report {
    pub drug_id: u64,
    pub anonymous_id: Bytes,
    pub description: String,
    pub severity: u32,
    pub timestamp: u32,
    pub submitter: Address,
    pub location: String,
    pub status: ReportStatus,
    pub evidence_hash: Bytes,
    pub metadata: String,
}

/// Latest amendment of a report. Overwritten on every successful update;
/// no history is kept.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReportUpdate {
    pub description: String,
    pub severity: u32,
    pub timestamp: u32,
    pub updater: Address,
}

/// A recorded fee-transfer intent. Settlement happens on the external
/// ledger; the registry only appends.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeeTransfer {
    pub amount: i128,
    pub from: Address,
    pub to: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Next report id, dense from 0.
    ReportCounter,
    /// Set-once fee recipient binding.
    AuthorityContract,
    /// Current submission fee.
    SubmissionFee,
    /// report_id -> Report
    Report(u64),
    /// report_id -> ReportUpdate (latest only)
    ReportUpdate(u64),
    /// evidence_hash -> report_id
    ReportByHash(Bytes),
    /// Allowlist membership mirrored from the external authority registry.
    VerifiedAuthority(Address),
    /// Append-only Vec<FeeTransfer>
    FeeTransfers,
}
