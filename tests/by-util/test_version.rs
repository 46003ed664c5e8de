// This file is part of the symcheck package.
//
// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

use crate::common::util::*;

#[test]
fn test_version_header_values() {
    new_ucmd!().succeeds().stdout_is(
        "version: 0.1.0\n\
         major: 0\n\
         minor: 1\n\
         patch: 0\n",
    );
}

// the tweak component is not configured in a default build; its absence
// must be reported without failing the run
#[test]
fn test_missing_tweak_is_reported_but_not_fatal() {
    new_ucmd!()
        .succeeds()
        .stderr_is("MY_VERSION_TWEAK is not defined!\n");
}
