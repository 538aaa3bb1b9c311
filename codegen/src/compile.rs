//! AST → bytecode compilation.
//!
//! One function per node shape, following the opcode table and the
//! statement/expression/value compilation contracts in spec §4.1.
//! `compile_value` backs the handful of statement fields that are
//! compiled more loosely than a full expression (`LoadStmt.value`,
//! `StampStmt.value`, `ErrorStmt.code`): a literal interns directly, an
//! identifier interns as a string, and anything else falls back to a
//! fixed `"<expr>"` placeholder constant rather than attempting constant
//! folding.

use eminor_ast::{Block, CapsuleRef, ConstValue, ExprKind, Item, Program};
use eminor_container::opcode;
use log::trace;

use crate::emit::Emitter;
use crate::error::EmitError;

/// Compiles `program`'s entry block into a fully-resolved `Emitter`: every
/// fixup has been patched and the terminal `END` has been appended.
pub(crate) fn compile_to_emitter(program: &Program) -> Result<Emitter, EmitError> {
    let mut emitter = Emitter::new();
    compile_block(&mut emitter, &program.entry.block)?;
    emitter.push_u8(opcode::END);
    emitter.resolve_fixups()?;
    Ok(emitter)
}

/// Compiles `program`'s entry block to a bare byte vector, for callers
/// that don't need the sidecar tables (e.g. the scenario tests below).
#[cfg(test)]
pub(crate) fn compile(program: &Program) -> Result<Vec<u8>, EmitError> {
    compile_to_emitter(program).map(Emitter::into_bytecode)
}

fn compile_block(emitter: &mut Emitter, block: &Block) -> Result<(), EmitError> {
    for item in &block.items {
        compile_item(emitter, item)?;
    }
    Ok(())
}

fn compile_item(emitter: &mut Emitter, item: &Item) -> Result<(), EmitError> {
    match item {
        Item::FunctionDecl(decl) => {
            emitter.function_index(&decl.name.name);
        }
        Item::WorkerDecl(decl) => {
            emitter.function_index(&decl.name.name);
        }
        Item::LetDecl(_) | Item::ModuleDecl(_) | Item::ExportDecl(_) | Item::ImportDecl(_) => {
            // No direct code emission; these only register names, and the
            // validator is the component that reads them back out.
        }
        Item::LabelStmt(stmt) => {
            trace!("label {} at offset {}", stmt.name, emitter.here());
            emitter.define_label(&stmt.name);
        }
        Item::InitStmt(stmt) => {
            emitter.push_u8(opcode::INIT);
            emitter.push_capsule(&stmt.target.name);
        }
        Item::LoadStmt(stmt) => {
            let kidx = compile_value(emitter, &stmt.value)?;
            emitter.push_u8(opcode::LOAD);
            emitter.push_capsule(&stmt.target.name);
            emitter.push_u16_be(kidx);
        }
        Item::CallStmt(stmt) => {
            let fidx = emitter.function_index(&stmt.func.name);
            match &stmt.arg {
                Some(arg) => {
                    emitter.push_u8(opcode::CALLA);
                    emitter.push_u16_be(fidx);
                    emitter.push_capsule(&arg.name);
                }
                None => {
                    emitter.push_u8(opcode::CALL);
                    emitter.push_u16_be(fidx);
                }
            }
        }
        Item::ExitStmt(_) => emitter.push_u8(opcode::EXIT),
        Item::LeaseStmt(stmt) => emit_cap_op(emitter, opcode::LEASE, &stmt.target),
        Item::SubleaseStmt(stmt) => emit_cap_op(emitter, opcode::SUBLEASE, &stmt.target),
        Item::ReleaseStmt(stmt) => emit_cap_op(emitter, opcode::RELEASE, &stmt.target),
        Item::CheckExpStmt(stmt) => emit_cap_op(emitter, opcode::CHECKEXP, &stmt.target),
        Item::RenderStmt(stmt) => emit_cap_op(emitter, opcode::RENDER, &stmt.target),
        Item::InputStmt(stmt) => emit_cap_op(emitter, opcode::INPUT, &stmt.target),
        Item::OutputStmt(stmt) => emit_cap_op(emitter, opcode::OUTPUT, &stmt.target),
        Item::SendStmt(stmt) => {
            emitter.push_u8(opcode::SEND);
            emitter.push_capsule(&stmt.chan.name);
            emitter.push_capsule(&stmt.pkt.name);
        }
        Item::RecvStmt(stmt) => {
            emitter.push_u8(opcode::RECV);
            emitter.push_capsule(&stmt.chan.name);
            emitter.push_capsule(&stmt.pkt.name);
        }
        Item::SpawnStmt(stmt) => compile_spawn(emitter, stmt)?,
        Item::JoinStmt(stmt) => emit_cap_op(emitter, opcode::JOIN, &stmt.thread),
        Item::StampStmt(stmt) => {
            let kidx = compile_value(emitter, &stmt.value)?;
            emitter.push_u8(opcode::STAMP);
            emitter.push_capsule(&stmt.target.name);
            emitter.push_u16_be(kidx);
        }
        Item::ExpireStmt(stmt) => {
            let kidx = emitter.intern(stmt.duration.resolve()?);
            emitter.push_u8(opcode::EXPIRE);
            emitter.push_capsule(&stmt.target.name);
            emitter.push_u16_be(kidx);
        }
        Item::SleepStmt(stmt) => {
            let kidx = emitter.intern(stmt.duration.resolve()?);
            emitter.push_u8(opcode::SLEEP);
            emitter.push_u16_be(kidx);
        }
        Item::YieldStmt(_) => emitter.push_u8(opcode::YIELD),
        Item::ErrorStmt(stmt) => {
            let cidx = compile_value(emitter, &stmt.code)?;
            let midx = emitter.intern(stmt.message.resolve()?);
            emitter.push_u8(opcode::ERROR);
            emitter.push_capsule(&stmt.target.name);
            emitter.push_u16_be(cidx);
            emitter.push_u16_be(midx);
        }
        Item::IfStmt(stmt) => {
            compile_expr(emitter, &stmt.cond)?;
            let jz_at = emitter.push_branch_placeholder(opcode::JZ);
            compile_block(emitter, &stmt.then_block)?;
            let jmp_at = emitter.push_branch_placeholder(opcode::JMP);
            let else_target = emitter.here();
            emitter.patch_rel16(jz_at, else_target)?;
            if let Some(else_block) = &stmt.else_block {
                compile_block(emitter, else_block)?;
            }
            let end_target = emitter.here();
            emitter.patch_rel16(jmp_at, end_target)?;
        }
        Item::LoopStmt(stmt) => {
            let start = emitter.here();
            compile_expr(emitter, &stmt.cond)?;
            let jz_at = emitter.push_branch_placeholder(opcode::JZ);
            compile_block(emitter, &stmt.body)?;
            let back_at = emitter.push_branch_placeholder(opcode::JMP);
            emitter.patch_rel16(back_at, start)?;
            let end = emitter.here();
            emitter.patch_rel16(jz_at, end)?;
        }
        Item::GotoStmt(stmt) => {
            let at = emitter.push_branch_placeholder(opcode::JMP);
            emitter.record_fixup(at, stmt.label.clone());
        }
    }
    Ok(())
}

fn emit_cap_op(emitter: &mut Emitter, op: u8, target: &CapsuleRef) {
    emitter.push_u8(op);
    emitter.push_capsule(&target.name);
}

fn compile_spawn(emitter: &mut Emitter, stmt: &eminor_ast::SpawnStmt) -> Result<(), EmitError> {
    let fidx = emitter.function_index(&stmt.func.name);
    let argc = u8::try_from(stmt.args.len()).map_err(|_| EmitError::TooManySpawnArgs)?;
    emitter.push_u8(opcode::SPAWN);
    emitter.push_u16_be(fidx);
    emitter.push_u8(argc);
    for arg in &stmt.args {
        match arg {
            ExprKind::Literal(lit) => {
                let kidx = emitter.intern(lit.resolve()?);
                emitter.push_u8(opcode::spawn_arg::CONST);
                emitter.push_u16_be(kidx);
            }
            ExprKind::Identifier(id) if id.is_dollar => {
                emitter.push_u8(opcode::spawn_arg::CAPSULE);
                emitter.push_capsule(&id.name);
            }
            // Plain identifiers and compound expressions are not folded;
            // they fall back to a fixed placeholder constant (spec §9).
            _ => {
                let kidx = emitter.intern(ConstValue::String("<expr>".to_string()));
                emitter.push_u8(opcode::spawn_arg::CONST);
                emitter.push_u16_be(kidx);
            }
        }
    }
    Ok(())
}

fn compile_expr(emitter: &mut Emitter, expr: &ExprKind) -> Result<(), EmitError> {
    match expr {
        ExprKind::Literal(lit) => {
            let kidx = emitter.intern(lit.resolve()?);
            emitter.push_u8(opcode::PUSHK);
            emitter.push_u16_be(kidx);
        }
        ExprKind::Identifier(id) => {
            if id.is_dollar {
                emitter.push_u8(opcode::PUSHCAP);
                emitter.push_capsule(&id.name);
            } else {
                let kidx = emitter.intern(ConstValue::String(id.name.clone()));
                emitter.push_u8(opcode::PUSHK);
                emitter.push_u16_be(kidx);
            }
        }
        ExprKind::UnaryOp(op) => {
            compile_expr(emitter, &op.rhs)?;
            let op_id = opcode::unop::id_for(&op.op)
                .ok_or_else(|| EmitError::UnknownUnaryOperator(op.op.clone()))?;
            emitter.push_u8(opcode::UNOP);
            emitter.push_u8(op_id);
        }
        ExprKind::BinaryOp(op) => {
            compile_expr(emitter, &op.lhs)?;
            compile_expr(emitter, &op.rhs)?;
            let op_id = opcode::binop::id_for(&op.op)
                .ok_or_else(|| EmitError::UnknownBinaryOperator(op.op.clone()))?;
            emitter.push_u8(opcode::BINOP);
            emitter.push_u8(op_id);
        }
    }
    Ok(())
}

/// Value compilation for non-expression positions (spec §4.1 "Value
/// compilation"): a literal interns as its own kind; an identifier
/// (dollar or plain) interns as a `STRING`; anything else interns a fixed
/// `"<expr>"` placeholder.
fn compile_value(emitter: &mut Emitter, expr: &ExprKind) -> Result<u16, EmitError> {
    match expr {
        ExprKind::Literal(lit) => Ok(emitter.intern(lit.resolve()?)),
        ExprKind::Identifier(id) => {
            let s = if id.is_dollar {
                format!("${}", id.name)
            } else {
                id.name.clone()
            };
            Ok(emitter.intern(ConstValue::String(s)))
        }
        ExprKind::UnaryOp(_) | ExprKind::BinaryOp(_) => {
            Ok(emitter.intern(ConstValue::String("<expr>".to_string())))
        }
    }
}
