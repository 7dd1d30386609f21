/*
 * Copyright © 2025, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

pub fn remove_spaces (s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

/// turn a (region or output) name into something solver case files accept: no whitespace
/// and no leading digit
pub fn sanitize_name (s: &str) -> String {
    let s = remove_spaces(s);
    if s.starts_with(|c: char| c.is_ascii_digit()) {
        format!("a{s}")
    } else {
        s
    }
}
