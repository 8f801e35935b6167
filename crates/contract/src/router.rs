//! The invocation router.
//!
//! Stateless per invocation: resolve the caller identity, authorize the
//! requested operation for the caller's organization, validate arity, then
//! dispatch to the car registry. The first failing step aborts the
//! invocation; nothing is retained between requests.

use carledger_core::error::{CoreError, CoreResult};
use carledger_core::identity::{credential_fingerprint, extract_identity};
use carledger_core::operations::{AuthzPolicy, Operation};
use carledger_ledger::Ledger;

use crate::cars::CarRegistry;

/// Run one invocation and return its payload bytes.
///
/// `credential` is the raw caller-credential blob from the request;
/// `operation` is the wire operation name; `args` are positional string
/// arguments in catalog order.
pub async fn dispatch(
    ledger: &dyn Ledger,
    policy: &AuthzPolicy,
    credential: &[u8],
    operation: &str,
    args: &[String],
) -> CoreResult<Vec<u8>> {
    let identity = extract_identity(credential).map_err(|err| {
        tracing::warn!(
            credential = %credential_fingerprint(credential),
            %err,
            "credential rejected"
        );
        err
    })?;
    tracing::debug!(caller = %identity, operation, "invoke");

    let op = Operation::from_name(operation)
        .ok_or_else(|| CoreError::UnknownOperation(operation.to_string()))?;

    if !policy.is_permitted(op, &identity.organization) {
        tracing::warn!(caller = %identity, operation = op.name(), "operation forbidden");
        return Err(CoreError::Forbidden {
            operation: op.name(),
            organization: identity.organization,
        });
    }

    if args.len() != op.required_args() {
        return Err(CoreError::InvalidArguments {
            expected: op.required_args(),
            actual: args.len(),
        });
    }

    match op {
        Operation::QueryCar => CarRegistry::query_car(ledger, &args[0]).await,
        Operation::QueryAllCars => {
            let entries = CarRegistry::query_all(ledger).await?;
            serde_json::to_vec(&entries).map_err(|e| CoreError::EncodingFailed(e.to_string()))
        }
        Operation::HelloWorld => Ok(b"Hello world!".to_vec()),
        Operation::CheckIdentity => Ok(identity.to_string().into_bytes()),
        Operation::InitLedger => {
            CarRegistry::init_ledger(ledger).await?;
            Ok(b"Ledger successfully initiated".to_vec())
        }
        Operation::CreateCar => {
            CarRegistry::create_car(ledger, &args[0], &args[1], &args[2], &args[3], &args[4])
                .await?;
            Ok(b"Car successfully created".to_vec())
        }
        Operation::ChangeCarOwner => {
            CarRegistry::change_owner(ledger, &args[0], &args[1]).await?;
            Ok(b"Car owner successfully changed".to_vec())
        }
        Operation::AddRestriction => {
            CarRegistry::add_restriction(ledger, &args[0], &args[1]).await?;
            Ok(b"Adding restriction successful".to_vec())
        }
        Operation::RemoveRestriction => {
            CarRegistry::remove_restriction(ledger, &args[0]).await?;
            Ok(b"Removing restriction successful".to_vec())
        }
    }
}
