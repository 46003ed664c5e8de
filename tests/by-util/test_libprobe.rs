// This file is part of the symcheck package.
//
// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.
// spell-checker:ignore (words) GeeksQuiz

use crate::common::util::*;

#[test]
fn test_library_scoped_symbols_then_markers() {
    new_ucmd!().succeeds().stdout_only(
        "DEFINE_WITHOUT_VALUE: 1\n\
         DEFINE_WITH_INT_VALUE: 64\n\
         DEFINE_WITH_STRING_VALUE: hello\n\
         DEFINE_WITH_STRING_NUMBER_VALUE: 420\n\
         Before thread\n\
         Printing GeeksQuiz from Thread \n\
         After thread\n",
    );
}

// the join barrier, not scheduling luck, must order the markers
#[test]
fn test_marker_order_is_stable() {
    let result = new_ucmd!().succeeds();
    let stdout = result.stdout_str();
    let before = stdout.find("Before thread").unwrap();
    let worker = stdout.find("Printing GeeksQuiz from Thread").unwrap();
    let after = stdout.find("After thread").unwrap();
    assert!(before < worker && worker < after);
}
