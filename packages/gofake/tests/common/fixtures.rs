//! Go source fixtures

use gofake::features::type_checking::MemoryLocator;

pub const HEADER: &str = "// generated by \"gofake -i Test\"; DO NOT EDIT.";

pub const VOIDER: &str = "package voider

type Voider interface {
	VoidMethod()
}
";

pub const MAPPER: &str = "package mapper

type Mapper interface {
	MapParameter(map[string]string)
	MapReturn() map[string]string
}
";

/// `C` embeds `B`, spread over two files
pub const EMBED_BASE: &str = "package embed

type B interface {
	M1()
	M2(n int) error
}
";

pub const EMBED_COMPOSED: &str = "package embed

type C interface {
	B
	M3(s string)
}
";

/// Two interfaces, each referencing a different imported package
pub const MIXED_IMPORTS: &str = "package mixed

import (
	\"io\"
	\"time\"
)

type Source interface {
	Open(name string) (io.Reader, error)
}

type Clock interface {
	Now() time.Time
}
";

pub const SKIPPABLE: &str = "package skip

type Empty interface{}

type Number interface {
	~int | ~float64
}

type Box[T any] interface {
	Get() T
}

type Voider interface {
	VoidMethod()
}
";

/// Packages importable by the fixtures above
pub fn stdlib() -> MemoryLocator {
    MemoryLocator::new()
        .with_package(
            "io",
            &[(
                "io.go",
                "package io\n\ntype Reader interface {\n\tRead(p []byte) (n int, err error)\n}\n\ntype Writer interface {\n\tWrite(p []byte) (n int, err error)\n}\n",
            )],
        )
        .with_package(
            "time",
            &[("time.go", "package time\n\ntype Time struct{}\n\ntype Duration int64\n")],
        )
        .with_package(
            "example.com/fmtx",
            &[(
                "print.go",
                "package fmtx\n\ntype Printer interface {\n\tPrintf(format string, args ...string)\n}\n",
            )],
        )
}
