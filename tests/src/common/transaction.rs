use solana_message::{Message, VersionedMessage};
use solana_sdk::{hash::Hash, pubkey::Pubkey};
use solana_system_interface::instruction::transfer;
use wallet_scanner_lib::transaction::{TransactionUtil, VersionedTransactionOps};

/// Unsigned close transaction paid by `owner`, base64 encoded like the backend sends it
pub fn close_payload(owner: &Pubkey) -> String {
    let ix = transfer(owner, &Pubkey::new_unique(), 1);
    let message = Message::new_with_blockhash(&[ix], Some(owner), &Hash::new_unique());
    TransactionUtil::new_unsigned_versioned_transaction(VersionedMessage::Legacy(message))
        .encode_b64_transaction()
        .expect("Failed to encode close transaction")
}
