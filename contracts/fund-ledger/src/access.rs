//! Capability checks for every entry point.
//!
//! Each entry point names exactly one [`Capability`]; nothing else in the
//! contract compares addresses against the admin or a record's holder.

use shared::errors::Error;
use soroban_sdk::{Address, Env};

use crate::storage::{get_admin, get_record, is_frozen};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Capability {
    /// Fund operator. Unavailable once the fund is frozen.
    Admin,
    /// Current holder of the given record.
    Holder(u32),
    /// Anyone.
    Public,
}

/// Checks `caller` against `capability` and requires the caller's signature.
pub fn authorize(env: &Env, caller: &Address, capability: Capability) -> Result<(), Error> {
    match capability {
        Capability::Admin => {
            if !is_admin(env, caller)? {
                return Err(Error::Unauthorized);
            }
            if is_frozen(env) {
                return Err(Error::Frozen);
            }
            caller.require_auth();
            Ok(())
        }
        Capability::Holder(record_id) => {
            let record = get_record(env, record_id)?;
            if record.holder != *caller {
                return Err(Error::NotHolder);
            }
            caller.require_auth();
            Ok(())
        }
        Capability::Public => {
            caller.require_auth();
            Ok(())
        }
    }
}

/// Whether `caller` currently holds live admin rights.
pub fn has_admin_rights(env: &Env, caller: &Address) -> Result<bool, Error> {
    Ok(is_admin(env, caller)? && !is_frozen(env))
}

fn is_admin(env: &Env, caller: &Address) -> Result<bool, Error> {
    Ok(get_admin(env)? == *caller)
}
