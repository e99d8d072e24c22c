use crate::script::op_codes::*;
use crate::script::stack::{decode_bool, encode_num, pop_bool, pop_num};
use crate::script::Checker;
use crate::util::{hash160, ripemd160, sha1, sha256, sha256d, Error, Result};
use std::cmp::min;

/// Execute the script with no special rules
pub const NO_FLAGS: u32 = 0x00;

/// Require data pushes to use the smallest possible encoding
pub const SCRIPT_VERIFY_MINIMALDATA: u32 = 1 << 6;

/// Allow signature hashes that commit to the input amount using the fork id algorithm
pub const SCRIPT_ENABLE_SIGHASH_FORKID: u32 = 1 << 16;

/// Enable the opcodes re-activated in the magnetic upgrade
pub const SCRIPT_ENABLE_MAGNETIC_OPCODES: u32 = 1 << 17;

/// Enable the splice and bitwise opcodes re-activated in the monolith upgrade
pub const SCRIPT_ENABLE_MONOLITH_OPCODES: u32 = 1 << 18;

/// Flags used when building and checking R-puzzle spends
pub const STANDARD_FLAGS: u32 = SCRIPT_VERIFY_MINIMALDATA
    | SCRIPT_ENABLE_SIGHASH_FORKID
    | SCRIPT_ENABLE_MAGNETIC_OPCODES
    | SCRIPT_ENABLE_MONOLITH_OPCODES;

// Stack capacity defaults, which may be exceeded
const STACK_CAPACITY: usize = 100;
const ALT_STACK_CAPACITY: usize = 10;

/// Executes a script
pub fn eval<T: Checker>(script: &[u8], checker: &mut T, flags: u32) -> Result<()> {
    let mut stack: Vec<Vec<u8>> = Vec::with_capacity(STACK_CAPACITY);
    let mut alt_stack: Vec<Vec<u8>> = Vec::with_capacity(ALT_STACK_CAPACITY);

    // True for every IF branch currently being executed
    let mut branch_exec: Vec<bool> = Vec::new();

    // Start of the script code used by signature checks
    let mut check_index = 0;

    let mut i = 0;
    while i < script.len() {
        let op = script[i];
        let executing = branch_exec.iter().all(|b| *b);

        if !executing {
            match op {
                OP_IF | OP_NOTIF => branch_exec.push(false),
                OP_ELSE => {
                    let len = branch_exec.len();
                    // Only flip the innermost branch if its parent is executing
                    if branch_exec[..len - 1].iter().all(|b| *b) {
                        branch_exec[len - 1] = !branch_exec[len - 1];
                    }
                }
                OP_ENDIF => {
                    branch_exec.pop();
                }
                _ => {}
            }
            i = next_op(i, script);
            continue;
        }

        match op {
            OP_0 => stack.push(vec![]),
            1..=OP_PUSHDATA4 => {
                let data = push_data(i, script)?;
                if flags & SCRIPT_VERIFY_MINIMALDATA != 0 && !minimal_push(op, data) {
                    return Err(Error::ScriptError("Non-minimal data push".to_string()));
                }
                stack.push(data.to_vec());
            }
            OP_1NEGATE => stack.push(encode_num(-1)?),
            OP_1..=OP_16 => stack.push(encode_num((op - OP_1 + 1) as i64)?),
            OP_NOP => {}
            OP_IF => branch_exec.push(pop_bool(&mut stack)?),
            OP_NOTIF => branch_exec.push(!pop_bool(&mut stack)?),
            OP_ELSE => {
                let top = branch_exec
                    .last_mut()
                    .ok_or_else(|| Error::ScriptError("ELSE found without matching IF".to_string()))?;
                *top = !*top;
            }
            OP_ENDIF => {
                if branch_exec.pop().is_none() {
                    return Err(Error::ScriptError("ENDIF found without matching IF".to_string()));
                }
            }
            OP_VERIFY => verify(&mut stack)?,
            OP_RETURN => return Err(Error::ScriptError("Hit OP_RETURN".to_string())),
            OP_TOALTSTACK => {
                check_stack_size(1, &stack)?;
                alt_stack.push(stack.pop().unwrap());
            }
            OP_FROMALTSTACK => {
                check_stack_size(1, &alt_stack)?;
                stack.push(alt_stack.pop().unwrap());
            }
            OP_IFDUP => {
                check_stack_size(1, &stack)?;
                if decode_bool(&stack[stack.len() - 1]) {
                    let copy = stack[stack.len() - 1].clone();
                    stack.push(copy);
                }
            }
            OP_DEPTH => {
                let depth = stack.len() as i64;
                stack.push(encode_num(depth)?);
            }
            OP_DROP => {
                check_stack_size(1, &stack)?;
                stack.pop();
            }
            OP_DUP => {
                check_stack_size(1, &stack)?;
                let copy = stack[stack.len() - 1].clone();
                stack.push(copy);
            }
            OP_NIP => {
                check_stack_size(2, &stack)?;
                let index = stack.len() - 2;
                stack.remove(index);
            }
            OP_OVER => {
                check_stack_size(2, &stack)?;
                let copy = stack[stack.len() - 2].clone();
                stack.push(copy);
            }
            OP_PICK | OP_ROLL => {
                let n = pop_num(&mut stack)?;
                if n < 0 {
                    return Err(Error::ScriptError("Negative pick/roll index".to_string()));
                }
                check_stack_size(n as usize + 1, &stack)?;
                let index = stack.len() - n as usize - 1;
                let item = if op == OP_PICK {
                    stack[index].clone()
                } else {
                    stack.remove(index)
                };
                stack.push(item);
            }
            OP_ROT => {
                check_stack_size(3, &stack)?;
                let index = stack.len() - 3;
                let third = stack.remove(index);
                stack.push(third);
            }
            OP_SWAP => {
                check_stack_size(2, &stack)?;
                let len = stack.len();
                stack.swap(len - 1, len - 2);
            }
            OP_TUCK => {
                check_stack_size(2, &stack)?;
                let len = stack.len();
                let top = stack[len - 1].clone();
                stack.insert(len - 2, top);
            }
            OP_2DROP => {
                check_stack_size(2, &stack)?;
                stack.pop();
                stack.pop();
            }
            OP_2DUP => {
                check_stack_size(2, &stack)?;
                let len = stack.len();
                let (a, b) = (stack[len - 2].clone(), stack[len - 1].clone());
                stack.push(a);
                stack.push(b);
            }
            OP_3DUP => {
                check_stack_size(3, &stack)?;
                let len = stack.len();
                for j in 0..3 {
                    let item = stack[len - 3 + j].clone();
                    stack.push(item);
                }
            }
            OP_2OVER => {
                check_stack_size(4, &stack)?;
                let len = stack.len();
                let (a, b) = (stack[len - 4].clone(), stack[len - 3].clone());
                stack.push(a);
                stack.push(b);
            }
            OP_2ROT => {
                check_stack_size(6, &stack)?;
                let index = stack.len() - 6;
                let a = stack.remove(index);
                let b = stack.remove(index);
                stack.push(a);
                stack.push(b);
            }
            OP_2SWAP => {
                check_stack_size(4, &stack)?;
                let len = stack.len();
                stack.swap(len - 4, len - 2);
                stack.swap(len - 3, len - 1);
            }
            OP_CAT => {
                check_monolith(flags, op)?;
                check_stack_size(2, &stack)?;
                let top = stack.pop().unwrap();
                let len = stack.len();
                stack[len - 1].extend_from_slice(&top);
            }
            OP_SPLIT => {
                check_monolith(flags, op)?;
                let n = pop_num(&mut stack)?;
                check_stack_size(1, &stack)?;
                let item = stack.pop().unwrap();
                if n < 0 || n as usize > item.len() {
                    return Err(Error::ScriptError("OP_SPLIT out of range".to_string()));
                }
                let (left, right) = item.split_at(n as usize);
                stack.push(left.to_vec());
                stack.push(right.to_vec());
            }
            OP_SIZE => {
                check_stack_size(1, &stack)?;
                let size = stack[stack.len() - 1].len() as i64;
                stack.push(encode_num(size)?);
            }
            OP_EQUAL | OP_EQUALVERIFY => {
                check_stack_size(2, &stack)?;
                let a = stack.pop().unwrap();
                let b = stack.pop().unwrap();
                stack.push(encode_bool(a == b));
                if op == OP_EQUALVERIFY {
                    verify(&mut stack)?;
                }
            }
            OP_1ADD | OP_1SUB | OP_NEGATE | OP_ABS | OP_NOT | OP_0NOTEQUAL => {
                let a = pop_num(&mut stack)?;
                let result = match op {
                    OP_1ADD => a + 1,
                    OP_1SUB => a - 1,
                    OP_NEGATE => -a,
                    OP_ABS => a.abs(),
                    OP_NOT => (a == 0) as i64,
                    _ => (a != 0) as i64,
                };
                stack.push(encode_num(result)?);
            }
            OP_ADD | OP_SUB | OP_BOOLAND | OP_BOOLOR | OP_NUMEQUAL | OP_NUMEQUALVERIFY
            | OP_NUMNOTEQUAL | OP_LESSTHAN | OP_GREATERTHAN | OP_LESSTHANOREQUAL
            | OP_GREATERTHANOREQUAL | OP_MIN | OP_MAX => {
                let b = pop_num(&mut stack)?;
                let a = pop_num(&mut stack)?;
                let result = match op {
                    OP_ADD => a + b,
                    OP_SUB => a - b,
                    OP_BOOLAND => (a != 0 && b != 0) as i64,
                    OP_BOOLOR => (a != 0 || b != 0) as i64,
                    OP_NUMEQUAL | OP_NUMEQUALVERIFY => (a == b) as i64,
                    OP_NUMNOTEQUAL => (a != b) as i64,
                    OP_LESSTHAN => (a < b) as i64,
                    OP_GREATERTHAN => (a > b) as i64,
                    OP_LESSTHANOREQUAL => (a <= b) as i64,
                    OP_GREATERTHANOREQUAL => (a >= b) as i64,
                    OP_MIN => a.min(b),
                    _ => a.max(b),
                };
                stack.push(encode_num(result)?);
                if op == OP_NUMEQUALVERIFY {
                    verify(&mut stack)?;
                }
            }
            OP_WITHIN => {
                let max = pop_num(&mut stack)?;
                let min = pop_num(&mut stack)?;
                let x = pop_num(&mut stack)?;
                stack.push(encode_bool(x >= min && x < max));
            }
            OP_RIPEMD160 | OP_SHA1 | OP_SHA256 | OP_HASH160 | OP_HASH256 => {
                check_stack_size(1, &stack)?;
                let item = stack.pop().unwrap();
                let digest = match op {
                    OP_RIPEMD160 => ripemd160(&item),
                    OP_SHA1 => sha1(&item),
                    OP_SHA256 => sha256(&item),
                    OP_HASH160 => hash160(&item).0.to_vec(),
                    _ => sha256d(&item).0.to_vec(),
                };
                stack.push(digest);
            }
            OP_CODESEPARATOR => check_index = i + 1,
            OP_CHECKSIG | OP_CHECKSIGVERIFY => {
                check_stack_size(2, &stack)?;
                let pubkey = stack.pop().unwrap();
                let sig = stack.pop().unwrap();
                let success = checker.check_sig(&sig, &pubkey, &script[check_index..], flags)?;
                stack.push(encode_bool(success));
                if op == OP_CHECKSIGVERIFY {
                    verify(&mut stack)?;
                }
            }
            _ => {
                let msg = format!("Unsupported opcode {}", op_name(op).unwrap_or("UNKNOWN"));
                return Err(Error::ScriptError(msg));
            }
        }

        i = next_op(i, script);
    }

    if !branch_exec.is_empty() {
        return Err(Error::ScriptError("ENDIF missing".to_string()));
    }
    check_stack_size(1, &stack)?;
    if !decode_bool(&stack[stack.len() - 1]) {
        return Err(Error::ScriptError("Top of stack is false".to_string()));
    }
    Ok(())
}

/// Gets the next operation index in the script, or the script length if at the end
pub fn next_op(i: usize, script: &[u8]) -> usize {
    if i >= script.len() {
        return script.len();
    }
    let next = match script[i] {
        len @ 1..=75 => i + 1 + len as usize,
        OP_PUSHDATA1 => {
            if i + 2 > script.len() {
                return script.len();
            }
            i + 2 + script[i + 1] as usize
        }
        OP_PUSHDATA2 => {
            if i + 3 > script.len() {
                return script.len();
            }
            i + 3 + ((script[i + 1] as usize) << 0) + ((script[i + 2] as usize) << 8)
        }
        OP_PUSHDATA4 => {
            if i + 5 > script.len() {
                return script.len();
            }
            i + 5
                + ((script[i + 1] as usize) << 0)
                + ((script[i + 2] as usize) << 8)
                + ((script[i + 3] as usize) << 16)
                + ((script[i + 4] as usize) << 24)
        }
        _ => i + 1,
    };
    min(next, script.len())
}

/// Returns the data pushed by the push opcode at index i
pub(crate) fn push_data(i: usize, script: &[u8]) -> Result<&[u8]> {
    let (start, len) = match script[i] {
        len @ 1..=75 => (i + 1, len as usize),
        OP_PUSHDATA1 if i + 2 <= script.len() => (i + 2, script[i + 1] as usize),
        OP_PUSHDATA2 if i + 3 <= script.len() => {
            (i + 3, ((script[i + 1] as usize) << 0) + ((script[i + 2] as usize) << 8))
        }
        OP_PUSHDATA4 if i + 5 <= script.len() => (
            i + 5,
            ((script[i + 1] as usize) << 0)
                + ((script[i + 2] as usize) << 8)
                + ((script[i + 3] as usize) << 16)
                + ((script[i + 4] as usize) << 24),
        ),
        _ => return Err(Error::ScriptError("Not enough data for push length".to_string())),
    };
    if start + len > script.len() {
        return Err(Error::ScriptError("Push past end of script".to_string()));
    }
    Ok(&script[start..start + len])
}

fn minimal_push(op: u8, data: &[u8]) -> bool {
    match data.len() {
        0 => false,
        1 if (1..=16).contains(&data[0]) || data[0] == 0x81 => false,
        1..=75 => op as usize == data.len(),
        76..=255 => op == OP_PUSHDATA1,
        256..=65535 => op == OP_PUSHDATA2,
        _ => true,
    }
}

fn check_monolith(flags: u32, op: u8) -> Result<()> {
    if flags & SCRIPT_ENABLE_MONOLITH_OPCODES == 0 {
        let msg = format!("{} is disabled", op_name(op).unwrap_or("UNKNOWN"));
        return Err(Error::ScriptError(msg));
    }
    Ok(())
}

#[inline]
fn check_stack_size(minsize: usize, stack: &Vec<Vec<u8>>) -> Result<()> {
    if stack.len() < minsize {
        let msg = format!("Stack too small: {}", minsize);
        return Err(Error::ScriptError(msg));
    }
    Ok(())
}

#[inline]
fn verify(stack: &mut Vec<Vec<u8>>) -> Result<()> {
    if !pop_bool(stack)? {
        return Err(Error::ScriptError("OP_VERIFY failed".to_string()));
    }
    Ok(())
}

#[inline]
fn encode_bool(b: bool) -> Vec<u8> {
    if b {
        vec![1]
    } else {
        vec![]
    }
}
