#![no_std]

use soroban_sdk::{Address, Bytes, Env, Vec};

use crate::types::{DataKey, FeeTransfer, Report, ReportUpdate};

const DEFAULT_SUBMISSION_FEE: i128 = 500;

// -----------------------------------------------------------------------
// Counter
// -----------------------------------------------------------------------

pub fn load_report_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::ReportCounter)
        .unwrap_or(0)
}

pub fn save_report_count(env: &Env, count: u64) {
    env.storage()
        .instance()
        .set(&DataKey::ReportCounter, &count);
}

// -----------------------------------------------------------------------
// Authority binding and fee config
// -----------------------------------------------------------------------

pub fn load_authority_contract(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::AuthorityContract)
}

pub fn save_authority_contract(env: &Env, authority: &Address) {
    env.storage()
        .instance()
        .set(&DataKey::AuthorityContract, authority);
}

pub fn load_submission_fee(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::SubmissionFee)
        .unwrap_or(DEFAULT_SUBMISSION_FEE)
}

pub fn save_submission_fee(env: &Env, fee: i128) {
    env.storage().instance().set(&DataKey::SubmissionFee, &fee);
}

// -----------------------------------------------------------------------
// Reports
// -----------------------------------------------------------------------

pub fn save_report(env: &Env, report_id: u64, report: &Report) {
    env.storage()
        .persistent()
        .set(&DataKey::Report(report_id), report);
}

pub fn load_report(env: &Env, report_id: u64) -> Option<Report> {
    env.storage().persistent().get(&DataKey::Report(report_id))
}

pub fn save_report_update(env: &Env, report_id: u64, update: &ReportUpdate) {
    env.storage()
        .persistent()
        .set(&DataKey::ReportUpdate(report_id), update);
}

pub fn load_report_update(env: &Env, report_id: u64) -> Option<ReportUpdate> {
    env.storage()
        .persistent()
        .get(&DataKey::ReportUpdate(report_id))
}

// -----------------------------------------------------------------------
// Evidence-hash index
// -----------------------------------------------------------------------

pub fn index_report_hash(env: &Env, evidence_hash: &Bytes, report_id: u64) {
    env.storage()
        .persistent()
        .set(&DataKey::ReportByHash(evidence_hash.clone()), &report_id);
}

pub fn is_hash_registered(env: &Env, evidence_hash: &Bytes) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::ReportByHash(evidence_hash.clone()))
}

// -----------------------------------------------------------------------
// Verified-authority allowlist
// -----------------------------------------------------------------------

pub fn add_authority_member(env: &Env, member: &Address) {
    env.storage()
        .persistent()
        .set(&DataKey::VerifiedAuthority(member.clone()), &true);
}

pub fn remove_authority_member(env: &Env, member: &Address) {
    env.storage()
        .persistent()
        .remove(&DataKey::VerifiedAuthority(member.clone()));
}

pub fn is_authority_member(env: &Env, member: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::VerifiedAuthority(member.clone()))
}

// -----------------------------------------------------------------------
// Fee-transfer log
// -----------------------------------------------------------------------

pub fn record_fee_transfer(env: &Env, transfer: &FeeTransfer) {
    let mut transfers: Vec<FeeTransfer> = env
        .storage()
        .persistent()
        .get(&DataKey::FeeTransfers)
        .unwrap_or(Vec::new(env));
    transfers.push_back(transfer.clone());
    env.storage()
        .persistent()
        .set(&DataKey::FeeTransfers, &transfers);
}

pub fn load_fee_transfers(env: &Env) -> Vec<FeeTransfer> {
    env.storage()
        .persistent()
        .get(&DataKey::FeeTransfers)
        .unwrap_or(Vec::new(env))
}
