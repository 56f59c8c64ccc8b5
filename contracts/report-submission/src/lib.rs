#![no_std]

mod storage;
mod types;
mod validation;


use soroban_sdk::{contract, contractimpl, Address, Bytes, Env, String, Symbol, Vec};
use storage::*;
use types::*;
use validation::*;

/// Reserved zero account; never accepted as the authority binding.
const BURN_ADDRESS: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";

#[contract]
pub struct ReportSubmission;

#[contractimpl]
impl ReportSubmission {
    /// Bind the authority contract that receives submission fees.
    /// The binding is permanent; rebinding fails.
    pub fn set_authority_contract(env: Env, authority: Address) -> Result<(), Error> {
        if authority == Address::from_str(&env, BURN_ADDRESS) {
            return Err(Error::NotAuthorized);
        }
        if load_authority_contract(&env).is_some() {
            return Err(Error::ReportAlreadyExists);
        }

        save_authority_contract(&env, &authority);

        env.events()
            .publish((Symbol::new(&env, "authority_set"),), authority);

        Ok(())
    }

    /// Update the per-submission fee. Requires the authority binding.
    pub fn set_submission_fee(env: Env, new_fee: i128) -> Result<(), Error> {
        if load_authority_contract(&env).is_none() {
            return Err(Error::AuthorityNotSet);
        }

        save_submission_fee(&env, new_fee);

        env.events()
            .publish((Symbol::new(&env, "fee_updated"),), new_fee);

        Ok(())
    }

    /// Mirror a membership grant from the external authority registry.
    pub fn add_verified_authority(env: Env, member: Address) {
        add_authority_member(&env, &member);

        env.events()
            .publish((Symbol::new(&env, "authority_added"),), member);
    }

    /// Mirror a membership revocation from the external authority registry.
    pub fn remove_verified_authority(env: Env, member: Address) {
        remove_authority_member(&env, &member);

        env.events()
            .publish((Symbol::new(&env, "authority_removed"),), member);
    }

    /// Submit a new anonymous drug report and charge the submission fee.
    ///
    /// Checks run in a fixed order and the first failure decides the
    /// error code; nothing is written on failure.
    pub fn submit_report(
        env: Env,
        submitter: Address,
        drug_id: u64,
        anonymous_id: Bytes,
        description: String,
        severity: u32,
        location: String,
        evidence_hash: Bytes,
        metadata: String,
    ) -> Result<u64, Error> {
        submitter.require_auth();

        let report_id = load_report_count(&env);
        validate_report_capacity(report_id)?;
        validate_drug_id(drug_id)?;
        validate_anonymous_id(&anonymous_id)?;
        validate_description(&description)?;
        validate_severity(severity)?;
        validate_location(&location)?;
        validate_evidence_hash(&evidence_hash)?;
        validate_metadata(&metadata)?;

        if !is_authority_member(&env, &submitter) {
            return Err(Error::NotAuthorized);
        }
        if is_hash_registered(&env, &evidence_hash) {
            return Err(Error::ReportAlreadyExists);
        }
        let authority = load_authority_contract(&env).ok_or(Error::AuthorityNotSet)?;

        record_fee_transfer(
            &env,
            &FeeTransfer {
                amount: load_submission_fee(&env),
                from: submitter.clone(),
                to: authority,
            },
        );

        let report = Report {
            drug_id,
            anonymous_id,
            description,
            severity,
            timestamp: env.ledger().sequence(),
            submitter: submitter.clone(),
            location,
            status: ReportStatus::Pending,
            evidence_hash: evidence_hash.clone(),
            metadata,
        };

        save_report(&env, report_id, &report);
        index_report_hash(&env, &evidence_hash, report_id);
        save_report_count(&env, report_id + 1);

        env.events().publish(
            (Symbol::new(&env, "report_submitted"),),
            (report_id, submitter, drug_id),
        );

        Ok(report_id)
    }

    /// Amend a report's description and severity. Only the original
    /// submitter may amend; everything else on the report is untouched.
    pub fn update_report(
        env: Env,
        updater: Address,
        report_id: u64,
        description: String,
        severity: u32,
    ) -> Result<(), Error> {
        updater.require_auth();

        let mut report = load_report(&env, report_id).ok_or(Error::ReportNotFound)?;

        if report.submitter != updater {
            return Err(Error::NotAuthorized);
        }
        validate_description(&description)?;
        validate_severity(severity)?;

        let timestamp = env.ledger().sequence();

        report.description = description.clone();
        report.severity = severity;
        report.timestamp = timestamp;
        save_report(&env, report_id, &report);

        save_report_update(
            &env,
            report_id,
            &ReportUpdate {
                description,
                severity,
                timestamp,
                updater: updater.clone(),
            },
        );

        env.events().publish(
            (Symbol::new(&env, "report_updated"),),
            (report_id, updater),
        );

        Ok(())
    }

    /// Record a review decision. Only verified authorities may change a
    /// report's status.
    pub fn review_report(
        env: Env,
        reviewer: Address,
        report_id: u64,
        status: ReportStatus,
    ) -> Result<(), Error> {
        reviewer.require_auth();

        if !is_authority_member(&env, &reviewer) {
            return Err(Error::NotAuthorized);
        }

        let mut report = load_report(&env, report_id).ok_or(Error::ReportNotFound)?;
        report.status = status;
        save_report(&env, report_id, &report);

        env.events().publish(
            (Symbol::new(&env, "report_reviewed"),),
            (report_id, reviewer),
        );

        Ok(())
    }

    pub fn get_report(env: Env, report_id: u64) -> Option<Report> {
        load_report(&env, report_id)
    }

    /// Latest amendment for a report, if it was ever amended.
    pub fn get_report_update(env: Env, report_id: u64) -> Option<ReportUpdate> {
        load_report_update(&env, report_id)
    }

    /// Count of successfully submitted reports.
    pub fn get_report_count(env: Env) -> u64 {
        load_report_count(&env)
    }

    pub fn is_report_registered(env: Env, evidence_hash: Bytes) -> bool {
        is_hash_registered(&env, &evidence_hash)
    }

    pub fn is_verified_authority(env: Env, principal: Address) -> bool {
        is_authority_member(&env, &principal)
    }

    pub fn get_authority_contract(env: Env) -> Option<Address> {
        load_authority_contract(&env)
    }

    pub fn get_submission_fee(env: Env) -> i128 {
        load_submission_fee(&env)
    }

    /// Fee-transfer intents recorded so far, oldest first.
    pub fn get_fee_transfers(env: Env) -> Vec<FeeTransfer> {
        load_fee_transfers(&env)
    }
}
