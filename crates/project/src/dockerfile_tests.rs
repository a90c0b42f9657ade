// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[yare::parameterized(
    plain            = { "WORKDIR libpng",                     Some("libpng") },
    absolute         = { "WORKDIR /src/libpng",                Some("/src/libpng") },
    leading_space    = { "   WORKDIR zlib",                    Some("zlib") },
    trailing_junk    = { "WORKDIR zlib   # comment",           Some("zlib") },
    dollar_escaped   = { "WORKDIR $SRC/curl",                  Some("$$SRC/curl") },
    two_dollars      = { "WORKDIR ${SRC}/$NAME",               Some("$${SRC}/$$NAME") },
    lowercase        = { "workdir zlib",                       None },
    commented        = { "# WORKDIR zlib",                     None },
    mid_line         = { "RUN echo WORKDIR zlib",              None },
)]
fn single_line(dockerfile: &str, expected: Option<&str>) {
    assert_eq!(workdir_from_dockerfile(dockerfile).as_deref(), expected);
}

#[test]
fn first_directive_wins() {
    let dockerfile = "\
FROM gcr.io/oss-fuzz-base/base-builder
RUN git clone https://github.com/madler/zlib
WORKDIR zlib
COPY build.sh $SRC/
WORKDIR other
";
    assert_eq!(workdir_from_dockerfile(dockerfile).as_deref(), Some("zlib"));
}

#[test]
fn defaults_to_src_without_directive() {
    let dockerfile = "FROM gcr.io/oss-fuzz-base/base-builder\nCOPY build.sh $SRC/\n";
    assert_eq!(workdir_from_dockerfile(dockerfile), None);
    assert_eq!(workdir_or_default(dockerfile), "/src");
}
