//! Bytecode opcode definitions shared between the emitter and any future
//! consumer of the emitted stream.
//!
//! Each opcode is one octet. All multi-byte operands are big-endian,
//! unlike the little-endian convention seen elsewhere in this corpus —
//! this is the wire format E Minor bytecode actually uses.

/// No-op.
pub const NOP: u8 = 0x00;
/// Initialize capsule. Operand: cap:u8.
pub const INIT: u8 = 0x01;
/// Bind constant to capsule. Operands: cap:u8, kidx:u16.
pub const LOAD: u8 = 0x02;
/// Call function, no argument. Operand: fidx:u16.
pub const CALL: u8 = 0x03;
/// Call function with one capsule argument. Operands: fidx:u16, cap:u8.
pub const CALLA: u8 = 0x04;
/// Terminate execution.
pub const EXIT: u8 = 0x05;

/// Acquire lease. Operand: cap:u8.
pub const LEASE: u8 = 0x10;
/// Sub-lease. Operand: cap:u8.
pub const SUBLEASE: u8 = 0x11;
/// Release lease. Operand: cap:u8.
pub const RELEASE: u8 = 0x12;
/// Check expiration. Operand: cap:u8.
pub const CHECKEXP: u8 = 0x13;

/// Operand: cap:u8.
pub const RENDER: u8 = 0x20;
/// Operand: cap:u8.
pub const INPUT: u8 = 0x21;
/// Operand: cap:u8.
pub const OUTPUT: u8 = 0x22;

/// Operands: chan:u8, pkt:u8.
pub const SEND: u8 = 0x30;
/// Operands: chan:u8, pkt:u8.
pub const RECV: u8 = 0x31;

/// Spawn a worker. Operands: fidx:u16, argc:u8, then `argc` encoded
/// arguments — see `spawn_arg`.
pub const SPAWN: u8 = 0x40;
/// Join a spawned thread. Operand: thread:u8.
pub const JOIN: u8 = 0x41;

/// Operands: cap:u8, kidx:u16.
pub const STAMP: u8 = 0x50;
/// Operands: cap:u8, kidx:u16 (kidx refers to a DURATION constant).
pub const EXPIRE: u8 = 0x51;
/// Operand: kidx:u16 (kidx refers to a DURATION constant).
pub const SLEEP: u8 = 0x52;
/// No operand.
pub const YIELD: u8 = 0x53;

/// Operands: cap:u8, code_k:u16, msg_k:u16.
pub const ERROR: u8 = 0x60;

/// Push constant. Operand: kidx:u16.
pub const PUSHK: u8 = 0x80;
/// Push capsule reference. Operand: cap:u8.
pub const PUSHCAP: u8 = 0x82;

/// Apply a stack unary operator. Operand: op_id:u8 — see `unop`.
pub const UNOP: u8 = 0x90;
/// Apply a stack binary operator. Operand: op_id:u8 — see `binop`.
pub const BINOP: u8 = 0x91;

/// Branch if the top of stack is zero. Operand: rel:i16.
pub const JZ: u8 = 0xA0;
/// Branch if the top of stack is non-zero. Operand: rel:i16.
pub const JNZ: u8 = 0xA1;
/// Unconditional branch. Operand: rel:i16.
pub const JMP: u8 = 0xA2;

/// Sentinel marking the end of the emitted stream.
pub const END: u8 = 0xFF;

/// SPAWN argument kind tags.
pub mod spawn_arg {
    /// Argument is a constant pool reference. Payload: 16-bit constant index.
    pub const CONST: u8 = 0x01;
    /// Argument is a capsule reference. Payload: 8-bit capsule id.
    pub const CAPSULE: u8 = 0x02;
}

/// Unary operator ids used with the `UNOP` opcode.
pub mod unop {
    pub const NOT: u8 = 1;
    pub const BITNOT: u8 = 2;
    pub const NEG: u8 = 3;

    /// Maps a source-level unary operator token to its op id.
    pub fn id_for(op: &str) -> Option<u8> {
        match op {
            "!" => Some(NOT),
            "~" => Some(BITNOT),
            "-" => Some(NEG),
            _ => None,
        }
    }

    /// Returns the source-level token for a unary op id, for tooling.
    pub fn name_for(id: u8) -> Option<&'static str> {
        match id {
            NOT => Some("!"),
            BITNOT => Some("~"),
            NEG => Some("-"),
            _ => None,
        }
    }
}

/// Binary operator ids used with the `BINOP` opcode.
pub mod binop {
    pub const OR: u8 = 1;
    pub const AND: u8 = 2;
    pub const EQ: u8 = 3;
    pub const NE: u8 = 4;
    pub const LT: u8 = 5;
    pub const GT: u8 = 6;
    pub const LE: u8 = 7;
    pub const GE: u8 = 8;
    pub const ADD: u8 = 9;
    pub const SUB: u8 = 10;
    pub const MUL: u8 = 11;
    pub const DIV: u8 = 12;
    pub const MOD: u8 = 13;

    /// Maps a source-level binary operator token to its op id.
    pub fn id_for(op: &str) -> Option<u8> {
        match op {
            "||" => Some(OR),
            "&&" => Some(AND),
            "==" => Some(EQ),
            "!=" => Some(NE),
            "<" => Some(LT),
            ">" => Some(GT),
            "<=" => Some(LE),
            ">=" => Some(GE),
            "+" => Some(ADD),
            "-" => Some(SUB),
            "*" => Some(MUL),
            "/" => Some(DIV),
            "%" => Some(MOD),
            _ => None,
        }
    }

    /// Returns the source-level token for a binary op id, for tooling.
    pub fn name_for(id: u8) -> Option<&'static str> {
        match id {
            OR => Some("||"),
            AND => Some("&&"),
            EQ => Some("=="),
            NE => Some("!="),
            LT => Some("<"),
            GT => Some(">"),
            LE => Some("<="),
            GE => Some(">="),
            ADD => Some("+"),
            SUB => Some("-"),
            MUL => Some("*"),
            DIV => Some("/"),
            MOD => Some("%"),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn unop_id_for_when_known_op_then_roundtrips_through_name_for() {
        for op in ["!", "~", "-"] {
            let id = unop::id_for(op).unwrap();
            assert_eq!(unop::name_for(id), Some(op));
        }
    }

    #[test]
    fn binop_id_for_when_known_op_then_roundtrips_through_name_for() {
        for op in ["||", "&&", "==", "!=", "<", ">", "<=", ">=", "+", "-", "*", "/", "%"] {
            let id = binop::id_for(op).unwrap();
            assert_eq!(binop::name_for(id), Some(op));
        }
    }

    #[test]
    fn binop_id_for_when_unknown_op_then_none() {
        assert_eq!(binop::id_for("^"), None);
    }

    #[rstest]
    #[case(NOP, 0x00)]
    #[case(INIT, 0x01)]
    #[case(CALL, 0x03)]
    #[case(EXIT, 0x05)]
    #[case(LEASE, 0x10)]
    #[case(SPAWN, 0x40)]
    #[case(PUSHK, 0x80)]
    #[case(JZ, 0xA0)]
    #[case(JMP, 0xA2)]
    #[case(END, 0xFF)]
    fn opcode_matches_spec_table(#[case] opcode: u8, #[case] expected: u8) {
        assert_eq!(opcode, expected);
    }

    #[rstest]
    #[case("||", binop::OR)]
    #[case("&&", binop::AND)]
    #[case("==", binop::EQ)]
    #[case("<=", binop::LE)]
    #[case("+", binop::ADD)]
    #[case("%", binop::MOD)]
    fn binop_id_for_matches_spec_table(#[case] token: &str, #[case] expected: u8) {
        assert_eq!(binop::id_for(token), Some(expected));
    }
}
