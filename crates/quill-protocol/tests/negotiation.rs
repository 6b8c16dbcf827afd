//! End-to-end negotiation flow as a handshake layer drives it: local
//! versions go out as tags, the receiving side validates and decodes
//! them, selects against its own preference list and answers with the
//! chosen version's tag.

use quill_protocol::{
    is_supported_version, select_version, VersionNumber, VersionTag, SUPPORTED_VERSIONS,
};

/// Decode advertised tags the way a careful endpoint does: anything
/// malformed becomes UNSUPPORTED and is left for the selector to skip.
fn decode_advertised(tags: &[VersionTag]) -> Vec<VersionNumber> {
    tags.iter()
        .map(|tag| tag.checked_number().unwrap_or(VersionNumber::UNSUPPORTED))
        .collect()
}

/// Initiator advertises everything, responder speaks only the older
/// versions; they settle on the responder's best.
#[test]
fn test_handshake_agrees_on_best_common_version() {
    let advertised: Vec<VersionTag> = SUPPORTED_VERSIONS.iter().map(|v| v.tag()).collect();

    let responder_prefs = [VersionNumber::V36, VersionNumber::V35];
    let offered = decode_advertised(&advertised);
    let chosen = select_version(&responder_prefs, &offered).unwrap();
    assert_eq!(chosen, VersionNumber::V36);

    let answer = chosen.tag();
    let accepted = answer.checked_number().unwrap();
    assert!(is_supported_version(SUPPORTED_VERSIONS, accepted));
}

/// A mangled tag in the advertisement is skipped, not fatal.
#[test]
fn test_corrupt_advertisement_does_not_poison_negotiation() {
    let advertised = vec![VersionTag::from_bytes(*b"Q0!7"), VersionNumber::V36.tag()];

    let offered = decode_advertised(&advertised);
    assert_eq!(offered[0], VersionNumber::UNSUPPORTED);
    assert_eq!(
        select_version(SUPPORTED_VERSIONS, &offered),
        Some(VersionNumber::V36)
    );
}

/// Peers with disjoint version sets get no version at all.
#[test]
fn test_incompatible_peers_get_no_version() {
    let advertised = vec![VersionNumber::new(99).tag()];
    let offered = decode_advertised(&advertised);
    assert_eq!(select_version(SUPPORTED_VERSIONS, &offered), None);
}

/// The selecting side's ordering decides; the advertiser's does not.
#[test]
fn test_responder_preference_drives_the_choice() {
    let responder_prefs = [VersionNumber::V36, VersionNumber::V37];

    for advertised in [
        vec![VersionNumber::V37.tag(), VersionNumber::V36.tag()],
        vec![VersionNumber::V36.tag(), VersionNumber::V37.tag()],
    ] {
        let offered = decode_advertised(&advertised);
        assert_eq!(
            select_version(&responder_prefs, &offered),
            Some(VersionNumber::V36)
        );
    }
}
