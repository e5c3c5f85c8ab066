use crate::record::Category::*;
use crate::record::EncodingRecord;
use crate::tables::op;

/// General-purpose instruction encodings, in match-priority order. Group-extension records
/// (fixed `modrm_reg`) are ordered ahead of any catch-all sharing the same opcode, matching the
/// tie-break rule in the component design.
pub static GENERAL_TABLE: &[EncodingRecord] = &[
    // mov/load ops.
    op!("mov r/m8, r8", [0x88], 0, 0, 1, 0, -1, Data),
    op!("mov r/m16-64, r16-64", [0x89], 0, 0, 1, 0, -1, Data),
    op!("mov r8, r/m8", [0x8a], 0, 0, 1, 0, -1, Data),
    op!("mov r16-64, r/m16-64", [0x8b], 0, 0, 1, 0, -1, Data),
    op!("mov r64, imm64", [0xb8], 8, 64, 0, 1, -1, Data), // +rd
    op!("mov r32, imm32", [0xb8], 4, 32, 0, 1, -1, Data), // +rd
    op!("mov r/m16-64, imm16", [0xc7], -1, 0, 1, 0, 0, Data), // /0
    op!("mov r/m8, imm8", [0xc6], 1, 8, 1, 0, 0, Data),   // /0
    op!("lea r16-64, m", [0x8d], 0, 0, 1, 0, -1, Data),
    op!("movzx r16-64, r/m8", [0x0f, 0xb6], 0, 0, 1, 0, -1, Data),
    op!("movzx r32-64, r/m16", [0x0f, 0xb7], 0, 0, 1, 0, -1, Data),
    op!("movsx r16-64, r/m8", [0x0f, 0xbe], 0, 0, 1, 0, -1, Data),
    op!("movsx r32-64, r/m16", [0x0f, 0xbf], 0, 0, 1, 0, -1, Data),
    op!("movsxd r64, r/m32", [0x63], 0, 64, 1, 0, -1, Data),
    // push/pop ops.
    op!("push r64", [0x50], 0, 64, 0, 1, -1, Data), // +rd
    op!("pop r64", [0x58], 0, 64, 0, 1, -1, Data),  // +rd
    op!("push imm8", [0x6a], 1, 0, 0, 0, -1, Data),
    op!("push imm32", [0x68], 4, 0, 0, 0, -1, Data),
    op!("push r/m16-64", [0xff], 0, 0, 1, 0, 6, Data), // /6
    op!("pop r/m16-64", [0x8f], 0, 0, 1, 0, 0, Data),  // /0
    // arithmetic ops.
    op!("add r/m8, r8", [0x00], 0, 8, 1, 0, -1, Arith),
    op!("add r/m16-64, r16-64", [0x01], 0, 0, 1, 0, -1, Arith),
    op!("add r8, r/m8", [0x02], 0, 8, 1, 0, -1, Arith),
    op!("add r16-64, r/m16-64", [0x03], 0, 0, 1, 0, -1, Arith),
    op!("add al, imm8", [0x04], 1, 8, 0, 0, -1, Arith),
    op!("add rax, imm32", [0x05], 4, 0, 0, 0, -1, Arith),
    op!("adc r/m8, r8", [0x10], 0, 8, 1, 0, -1, Arith),
    op!("adc r/m16-64, r16-64", [0x11], 0, 0, 1, 0, -1, Arith),
    op!("adc r8, r/m8", [0x12], 0, 8, 1, 0, -1, Arith),
    op!("adc r16-64, r/m16-64", [0x13], 0, 0, 1, 0, -1, Arith),
    op!("sub r/m8, r8", [0x28], 0, 8, 1, 0, -1, Arith),
    op!("sub r/m16-64, r16-64", [0x29], 0, 0, 1, 0, -1, Arith),
    op!("sub r8, r/m8", [0x2a], 0, 8, 1, 0, -1, Arith),
    op!("sub r16-64, r/m16-64", [0x2b], 0, 0, 1, 0, -1, Arith),
    op!("sub al, imm8", [0x2c], 1, 8, 0, 0, -1, Arith),
    op!("sub rax, imm32", [0x2d], 4, 0, 0, 0, -1, Arith),
    op!("sub r/m32, imm32", [0x81], 4, 32, 1, 0, 5, Arith), // /5
    op!("cmp r/m8, r8", [0x38], 0, 8, 1, 0, -1, Arith),
    op!("cmp r/m16-64, r16-64", [0x39], 0, 0, 1, 0, -1, Arith),
    op!("cmp r8, r/m8", [0x3a], 0, 8, 1, 0, -1, Arith),
    op!("cmp r16-64, r/m16-64", [0x3b], 0, 0, 1, 0, -1, Arith),
    op!("cmp al, imm8", [0x3c], 1, 8, 0, 0, -1, Arith),
    op!("cmp rax, imm32", [0x3d], 4, 0, 0, 0, -1, Arith),
    op!("cmp r/m64, imm32", [0x81], 4, 64, 1, 0, 7, Arith), // /7
    op!("mul r/m8", [0xf6], 0, 8, 1, 0, 4, Arith),          // /4
    op!("mul r/m16-64", [0xf7], 0, 0, 1, 0, 4, Arith),      // /4
    op!("idiv r/m8", [0xf6], 0, 8, 1, 0, 7, Arith),         // /7
    op!("idiv r/m16-64", [0xf7], 0, 0, 1, 0, 7, Arith),     // /7
    op!("div r/m8", [0xf6], 0, 8, 1, 0, 6, Arith),          // /6
    op!("div r/m16-64", [0xf7], 0, 0, 1, 0, 6, Arith),      // /6
    op!("inc r/m8", [0xfe], 0, 8, 1, 0, 0, Arith),          // /0
    op!("inc r/m16-64", [0xff], 0, 0, 1, 0, 0, Arith),      // /0
    op!("dec r/m8", [0xfe], 0, 8, 1, 0, 1, Arith),          // /1
    op!("dec r/m16-64", [0xff], 0, 0, 1, 0, 1, Arith),      // /1
    op!("imul r16-64, r/m16-64", [0x0f, 0xaf], 0, 0, 1, 0, -1, Arith),
    // logic ops.
    op!("and r/m8, r8", [0x20], 0, 8, 1, 0, -1, Logic),
    op!("and r/m16-64, r16-64", [0x21], 0, 0, 1, 0, -1, Logic),
    op!("and r8, r/m8", [0x22], 0, 8, 1, 0, -1, Logic),
    op!("and r16-64, r/m16-64", [0x23], 0, 0, 1, 0, -1, Logic),
    op!("and al, imm8", [0x24], 1, 8, 0, 0, -1, Logic),
    op!("and rax, imm32", [0x25], 4, 0, 0, 0, -1, Logic),
    op!("and r/m16-64, imm32", [0x81], 4, 0, 1, 0, 4, Logic), // /4
    op!("or r/m8, r8", [0x08], 0, 8, 1, 0, -1, Logic),
    op!("or r/m16-64, r16-64", [0x09], 0, 0, 1, 0, -1, Logic),
    op!("or r8, r/m8", [0x0a], 0, 8, 1, 0, -1, Logic),
    op!("or r16-64, r/m16-64", [0x0b], 0, 0, 1, 0, -1, Logic),
    op!("or al, imm8", [0x0c], 1, 8, 0, 0, -1, Logic),
    op!("or rax, imm32", [0x0d], 4, 0, 0, 0, -1, Logic),
    op!("or r/m8, imm8", [0x80], 1, 8, 1, 0, 1, Logic), // /1
    op!("xor r/m8, r8", [0x30], 0, 8, 1, 0, -1, Logic),
    op!("xor r/m16-64, r16-64", [0x31], 0, 0, 1, 0, -1, Logic),
    op!("xor r8, r/m8", [0x32], 0, 8, 1, 0, -1, Logic),
    op!("xor r16-64, r/m16-64", [0x33], 0, 0, 1, 0, -1, Logic),
    op!("xor al, imm8", [0x34], 1, 8, 0, 0, -1, Logic),
    op!("xor rax, imm32", [0x35], 4, 0, 0, 0, -1, Logic),
    op!("test r/m8, r8", [0x84], 0, 8, 1, 0, -1, Logic),
    op!("test r/m16-64, r16-64", [0x85], 0, 0, 1, 0, -1, Logic),
    op!("test al, imm8", [0xa8], 1, 8, 0, 0, -1, Logic),
    op!("test rax, imm32", [0xa9], 4, 0, 0, 0, -1, Logic),
    op!("test r/m8, imm8", [0xf6], 1, 8, 1, 0, 0, Logic),     // /0
    op!("test r/m16-64, imm32", [0xf7], 4, 0, 1, 0, 0, Logic), // /0
    op!("not r/m8", [0xf6], 0, 8, 1, 0, 2, Logic),            // /2
    op!("not r/m16-64", [0xf7], 0, 0, 1, 0, 2, Logic),        // /2
    op!("neg r/m8", [0xf6], 0, 8, 1, 0, 3, Logic),            // /3
    op!("neg r/m16-64", [0xf7], 0, 0, 1, 0, 3, Logic),        // /3
    // shifts/rotates ops.
    op!("shl r/m8, 1", [0xd0], 0, 8, 1, 0, 4, Logic),       // /4
    op!("shl r/m16-64, 1", [0xd1], 0, 0, 1, 0, 4, Logic),   // /4
    op!("shl r/m8, cl", [0xd2], 0, 8, 1, 0, 4, Logic),      // /4
    op!("shl r/m16-64, cl", [0xd3], 0, 0, 1, 0, 4, Logic),  // /4
    op!("shl r/m8, imm8", [0xc0], 1, 8, 1, 0, 4, Logic),    // /4
    op!("shl r/m16-64, imm8", [0xc1], 1, 0, 1, 0, 4, Logic), // /4
    op!("shr r/m8, 1", [0xd0], 0, 8, 1, 0, 5, Logic),       // /5
    op!("shr r/m16-64, 1", [0xd1], 0, 0, 1, 0, 5, Logic),   // /5
    op!("shr r/m8, cl", [0xd2], 0, 8, 1, 0, 5, Logic),      // /5
    op!("shr r/m16-64, cl", [0xd3], 0, 0, 1, 0, 5, Logic),  // /5
    op!("shr r/m8, imm8", [0xc0], 1, 8, 1, 0, 5, Logic),    // /5
    op!("shr r/m16-64, imm8", [0xc1], 1, 0, 1, 0, 5, Logic), // /5
    op!("sar r/m8, 1", [0xd0], 0, 8, 1, 0, 7, Logic),       // /7
    op!("sar r/m16-64, 1", [0xd1], 0, 0, 1, 0, 7, Logic),   // /7
    op!("sar r/m8, cl", [0xd2], 0, 8, 1, 0, 7, Logic),      // /7
    op!("sar r/m16-64, cl", [0xd3], 0, 0, 1, 0, 7, Logic),  // /7
    op!("sar r/m8, imm8", [0xc0], 1, 8, 1, 0, 7, Logic),    // /7
    op!("sar r/m16-64, imm8", [0xc1], 1, 0, 1, 0, 7, Logic), // /7
    op!("rol r/m8, 1", [0xd0], 0, 8, 1, 0, 0, Logic),       // /0
    op!("rol r/m16-64, 1", [0xd1], 0, 0, 1, 0, 0, Logic),   // /0
    op!("rol r/m8, cl", [0xd2], 0, 8, 1, 0, 0, Logic),      // /0
    op!("rol r/m16-64, cl", [0xd3], 0, 0, 1, 0, 0, Logic),  // /0
    op!("ror r/m8, 1", [0xd0], 0, 8, 1, 0, 1, Logic),       // /1
    op!("ror r/m16-64, 1", [0xd1], 0, 0, 1, 0, 1, Logic),   // /1
    op!("ror r/m8, cl", [0xd2], 0, 8, 1, 0, 1, Logic),      // /1
    op!("ror r/m16-64, cl", [0xd3], 0, 0, 1, 0, 1, Logic),  // /1
    // control flow ops.
    op!("jmp rel8", [0xeb], 1, 0, 0, 0, -1, Control),
    op!("jmp rel32", [0xe9], 4, 0, 0, 0, -1, Control),
    op!("jmp ptr16:16", [0xea], 6, 16, 0, 0, -1, Control),
    op!("jmp ptr16:32", [0xea], 6, 32, 0, 0, -1, Control),
    op!("jmp r/m64", [0xff], 0, 64, 1, 0, 4, Control), // /4
    op!("call rel32", [0xe8], 4, 0, 0, 0, -1, Control),
    op!("call r/m64", [0xff], 0, 64, 1, 0, 2, Control), // /2
    op!("ret", [0xc3], 0, 0, 0, 0, -1, Control),
    op!("ret imm16", [0xc2], 2, 0, 0, 0, -1, Control),
    op!("retf", [0xcb], 0, 0, 0, 0, -1, Control),
    op!("retf imm16", [0xca], 2, 0, 0, 0, -1, Control),
    // conditional jumps (short rel8).
    op!("jo rel8", [0x70], 1, 0, 0, 0, -1, Control),
    op!("jno rel8", [0x71], 1, 0, 0, 0, -1, Control),
    op!("jb rel8", [0x72], 1, 0, 0, 0, -1, Control),
    op!("jnb rel8", [0x73], 1, 0, 0, 0, -1, Control),
    op!("je rel8", [0x74], 1, 0, 0, 0, -1, Control),
    op!("jne rel8", [0x75], 1, 0, 0, 0, -1, Control),
    op!("jbe rel8", [0x76], 1, 0, 0, 0, -1, Control),
    op!("ja rel8", [0x77], 1, 0, 0, 0, -1, Control),
    op!("js rel8", [0x78], 1, 0, 0, 0, -1, Control),
    op!("jns rel8", [0x79], 1, 0, 0, 0, -1, Control),
    op!("jp rel8", [0x7a], 1, 0, 0, 0, -1, Control),
    op!("jnp rel8", [0x7b], 1, 0, 0, 0, -1, Control),
    op!("jl rel8", [0x7c], 1, 0, 0, 0, -1, Control),
    op!("jge rel8", [0x7d], 1, 0, 0, 0, -1, Control),
    op!("jle rel8", [0x7e], 1, 0, 0, 0, -1, Control),
    op!("jg rel8", [0x7f], 1, 0, 0, 0, -1, Control),
    // conditional jumps (near rel32).
    op!("jo rel32", [0x0f, 0x80], 4, 0, 0, 0, -1, Control),
    op!("jno rel32", [0x0f, 0x81], 4, 0, 0, 0, -1, Control),
    op!("jb rel32", [0x0f, 0x82], 4, 0, 0, 0, -1, Control),
    op!("jnb rel32", [0x0f, 0x83], 4, 0, 0, 0, -1, Control),
    op!("je rel32", [0x0f, 0x84], 4, 0, 0, 0, -1, Control),
    op!("jne rel32", [0x0f, 0x85], 4, 0, 0, 0, -1, Control),
    op!("jbe rel32", [0x0f, 0x86], 4, 0, 0, 0, -1, Control),
    op!("ja rel32", [0x0f, 0x87], 4, 0, 0, 0, -1, Control),
    op!("js rel32", [0x0f, 0x88], 4, 0, 0, 0, -1, Control),
    op!("jns rel32", [0x0f, 0x89], 4, 0, 0, 0, -1, Control),
    op!("jp rel32", [0x0f, 0x8a], 4, 0, 0, 0, -1, Control),
    op!("jnp rel32", [0x0f, 0x8b], 4, 0, 0, 0, -1, Control),
    op!("jl rel32", [0x0f, 0x8c], 4, 0, 0, 0, -1, Control),
    op!("jge rel32", [0x0f, 0x8d], 4, 0, 0, 0, -1, Control),
    op!("jle rel32", [0x0f, 0x8e], 4, 0, 0, 0, -1, Control),
    op!("jg rel32", [0x0f, 0x8f], 4, 0, 0, 0, -1, Control),
    // conditional moves.
    op!("cmovo r16-64, r/m16-64", [0x0f, 0x40], 0, 0, 1, 0, -1, Data),
    op!("cmovno r16-64, r/m16-64", [0x0f, 0x41], 0, 0, 1, 0, -1, Data),
    op!("cmovb r16-64, r/m16-64", [0x0f, 0x42], 0, 0, 1, 0, -1, Data),
    op!("cmovnb r16-64, r/m16-64", [0x0f, 0x43], 0, 0, 1, 0, -1, Data),
    op!("cmove r16-64, r/m16-64", [0x0f, 0x44], 0, 0, 1, 0, -1, Data),
    op!("cmovne r16-64, r/m16-64", [0x0f, 0x45], 0, 0, 1, 0, -1, Data),
    op!("cmovbe r16-64, r/m16-64", [0x0f, 0x46], 0, 0, 1, 0, -1, Data),
    op!("cmova r16-64, r/m16-64", [0x0f, 0x47], 0, 0, 1, 0, -1, Data),
    op!("cmovs r16-64, r/m16-64", [0x0f, 0x48], 0, 0, 1, 0, -1, Data),
    op!("cmovns r16-64, r/m16-64", [0x0f, 0x49], 0, 0, 1, 0, -1, Data),
    op!("cmovp r16-64, r/m16-64", [0x0f, 0x4a], 0, 0, 1, 0, -1, Data),
    op!("cmovnp r16-64, r/m16-64", [0x0f, 0x4b], 0, 0, 1, 0, -1, Data),
    op!("cmovl r16-64, r/m16-64", [0x0f, 0x4c], 0, 0, 1, 0, -1, Data),
    op!("cmovge r16-64, r/m16-64", [0x0f, 0x4d], 0, 0, 1, 0, -1, Data),
    op!("cmovle r16-64, r/m16-64", [0x0f, 0x4e], 0, 0, 1, 0, -1, Data),
    op!("cmovg r16-64, r/m16-64", [0x0f, 0x4f], 0, 0, 1, 0, -1, Data),
    // string operations.
    op!("movs m8, m8", [0xa4], 0, 8, 0, 0, -1, Data),
    op!("movs m16-64, m16-64", [0xa5], 0, 0, 0, 0, -1, Data),
    op!("cmps m8, m8", [0xa6], 0, 8, 0, 0, -1, Data),
    op!("cmps m16-64, m16-64", [0xa7], 0, 0, 0, 0, -1, Data),
    op!("stos m8", [0xaa], 0, 8, 0, 0, -1, Data),
    op!("stos m16-64", [0xab], 0, 0, 0, 0, -1, Data),
    op!("lods m8", [0xac], 0, 8, 0, 0, -1, Data),
    op!("lods m16-64", [0xad], 0, 0, 0, 0, -1, Data),
    op!("scas m8", [0xae], 0, 8, 0, 0, -1, Data),
    op!("scas m16-64", [0xaf], 0, 0, 0, 0, -1, Data),
    // stack/flags ops.
    op!("pushad", [0x60], 0, 32, 0, 0, -1, Flag),
    op!("popad", [0x61], 0, 32, 0, 0, -1, Flag),
    op!("pushfq", [0x9c], 0, 64, 0, 0, -1, Flag),
    op!("popfq", [0x9d], 0, 64, 0, 0, -1, Flag),
    op!("pushf", [0x9c], 0, 16, 0, 0, -1, Flag),
    op!("popf", [0x9d], 0, 16, 0, 0, -1, Flag),
    op!("enter", [0xc8], 3, 0, 0, 0, -1, Flag),
    op!("leave", [0xc9], 0, 0, 0, 0, -1, Flag),
    op!("clc", [0xf8], 0, 0, 0, 0, -1, Flag),
    op!("stc", [0xf9], 0, 0, 0, 0, -1, Flag),
    op!("cli", [0xfa], 0, 0, 0, 0, -1, Flag),
    op!("sti", [0xfb], 0, 0, 0, 0, -1, Flag),
    op!("cld", [0xfc], 0, 0, 0, 0, -1, Flag),
    op!("std", [0xfd], 0, 0, 0, 0, -1, Flag),
    op!("cmc", [0xf5], 0, 0, 0, 0, -1, Flag),
    // system/misc ops.
    op!("int imm8", [0xcd], 1, 0, 0, 0, -1, System),
    op!("int3", [0xcc], 0, 0, 0, 0, -1, System),
    op!("int1", [0xf1], 0, 0, 0, 0, -1, System), // icebp
    op!("into", [0xce], 0, 0, 0, 0, -1, System),
    op!("iret", [0xcf], 0, 16, 0, 0, -1, System),
    op!("iretd", [0xcf], 0, 32, 0, 0, -1, System),
    op!("iretq", [0xcf], 0, 64, 0, 0, -1, System),
    op!("syscall", [0x0f, 0x05], 0, 0, 0, 0, -1, System),
    op!("sysret", [0x0f, 0x07], 0, 0, 0, 0, -1, System),
    op!("sysenter", [0x0f, 0x34], 0, 0, 0, 0, -1, System),
    op!("sysexit", [0x0f, 0x35], 0, 0, 0, 0, -1, System),
    op!("hlt", [0xf4], 0, 0, 0, 0, -1, System),
    op!("nop", [0x90], 0, 0, 0, 0, -1, Misc),
    op!("nop r/m16", [0x0f, 0x1f], 0, 16, 1, 0, 0, Misc), // /0 multi-byte nop
    op!("nop r/m32", [0x0f, 0x1f], 0, 32, 1, 0, 0, Misc), // /0 multi-byte nop
    op!("pause", [0xf3, 0x90], 0, 0, 0, 0, -1, Misc),
    op!("ud2", [0x0f, 0x0b], 0, 0, 0, 0, -1, Misc),
    op!("rdtsc", [0x0f, 0x31], 0, 0, 0, 0, -1, Misc),
    op!("rdtscp", [0x0f, 0x01, 0xf9], 0, 0, 0, 0, -1, Misc),
    // loop family.
    op!("loop rel8", [0xe2], 1, 0, 0, 0, -1, Control),
    op!("loope rel8", [0xe1], 1, 0, 0, 0, -1, Control), // aka loopz
    op!("loopne rel8", [0xe0], 1, 0, 0, 0, -1, Control), // aka loopnz
    op!("jecxz rel8", [0xe3], 1, 32, 0, 0, -1, Control),
    op!("jrcxz rel8", [0xe3], 1, 64, 0, 0, -1, Control),
    // flag ops.
    op!("lahf", [0x9f], 0, 0, 0, 0, -1, Flag),
    op!("sahf", [0x9e], 0, 0, 0, 0, -1, Flag),
    op!("seto r/m8", [0x0f, 0x90], 0, 8, 1, 0, -1, Flag),
    op!("setno r/m8", [0x0f, 0x91], 0, 8, 1, 0, -1, Flag),
    op!("setb r/m8", [0x0f, 0x92], 0, 8, 1, 0, -1, Flag),
    op!("setnb r/m8", [0x0f, 0x93], 0, 8, 1, 0, -1, Flag),
    op!("sete r/m8", [0x0f, 0x94], 0, 8, 1, 0, -1, Flag),
    op!("setne r/m8", [0x0f, 0x95], 0, 8, 1, 0, -1, Flag),
    op!("setbe r/m8", [0x0f, 0x96], 0, 8, 1, 0, -1, Flag),
    op!("seta r/m8", [0x0f, 0x97], 0, 8, 1, 0, -1, Flag),
    op!("sets r/m8", [0x0f, 0x98], 0, 8, 1, 0, -1, Flag),
    op!("setns r/m8", [0x0f, 0x99], 0, 8, 1, 0, -1, Flag),
    op!("setp r/m8", [0x0f, 0x9a], 0, 8, 1, 0, -1, Flag),
    op!("setnp r/m8", [0x0f, 0x9b], 0, 8, 1, 0, -1, Flag),
    op!("setl r/m8", [0x0f, 0x9c], 0, 8, 1, 0, -1, Flag),
    op!("setge r/m8", [0x0f, 0x9d], 0, 8, 1, 0, -1, Flag),
    op!("setle r/m8", [0x0f, 0x9e], 0, 8, 1, 0, -1, Flag),
    op!("setg r/m8", [0x0f, 0x9f], 0, 8, 1, 0, -1, Flag),
    // bit manipulation.
    op!("bsf r16-64, r/m16-64", [0x0f, 0xbc], 0, 0, 1, 0, -1, Logic),
    op!("bsr r16-64, r/m16-64", [0x0f, 0xbd], 0, 0, 1, 0, -1, Logic),
    op!("bt r/m16, r16", [0x0f, 0xa3], 0, 16, 1, 0, -1, Logic),
    op!("bt r/m32, r32", [0x0f, 0xa3], 0, 32, 1, 0, -1, Logic),
    op!("bt r/m64, r64", [0x0f, 0xa3], 0, 64, 1, 0, -1, Logic),
    op!("bt r/m16, imm8", [0x0f, 0xba], 1, 16, 1, 0, 4, Logic), // /4
    op!("bt r/m32, imm8", [0x0f, 0xba], 1, 32, 1, 0, 4, Logic), // /4
    op!("bt r/m64, imm8", [0x0f, 0xba], 1, 64, 1, 0, 4, Logic), // /4
    op!("bts r/m16, r16", [0x0f, 0xab], 0, 16, 1, 0, -1, Logic),
    op!("bts r/m32, r32", [0x0f, 0xab], 0, 32, 1, 0, -1, Logic),
    op!("bts r/m64, r64", [0x0f, 0xab], 0, 64, 1, 0, -1, Logic),
    op!("btr r/m16, r16", [0x0f, 0xb3], 0, 16, 1, 0, -1, Logic),
    op!("btr r/m32, r32", [0x0f, 0xb3], 0, 32, 1, 0, -1, Logic),
    op!("btr r/m64, r64", [0x0f, 0xb3], 0, 64, 1, 0, -1, Logic),
    op!("btc r/m16, r16", [0x0f, 0xbb], 0, 16, 1, 0, -1, Logic),
    op!("btc r/m32, r32", [0x0f, 0xbb], 0, 32, 1, 0, -1, Logic),
    op!("btc r/m64, r64", [0x0f, 0xbb], 0, 64, 1, 0, -1, Logic),
    // exchange operations.
    op!("xchg r/m8, r8", [0x86], 0, 8, 1, 0, -1, Data),
    op!("xchg r/m16-64, r16-64", [0x87], 0, 0, 1, 0, -1, Data),
    op!("xchg rax, r64", [0x90], 0, 64, 0, 1, -1, Data), // +rd
    op!("cmpxchg r/m8, r8", [0x0f, 0xb0], 0, 8, 1, 0, -1, Data),
    op!("cmpxchg r/m16-64, r16-64", [0x0f, 0xb1], 0, 0, 1, 0, -1, Data),
    // system.
    op!("cpuid", [0x0f, 0xa2], 0, 0, 0, 0, -1, System),
    op!("wbinvd", [0x0f, 0x09], 0, 0, 0, 0, -1, System),
    op!("invd", [0x0f, 0x08], 0, 0, 0, 0, -1, System),
    op!("wrmsr", [0x0f, 0x30], 0, 0, 0, 0, -1, System),
    op!("rdmsr", [0x0f, 0x32], 0, 0, 0, 0, -1, System),
    // cet / endbr.
    op!("endbr64", [0xf3, 0x0f, 0x1e, 0xfa], 0, 64, 0, 0, -1, Misc),
    op!("endbr32", [0xf3, 0x0f, 0x1e, 0xfb], 0, 32, 0, 0, -1, Misc),
    // segment load/store operations.
    op!("lds r16, m16:16", [0xc5], 0, 16, 1, 0, -1, Data),
    op!("les r16, m16:16", [0xc4], 0, 16, 1, 0, -1, Data),
    op!("lfs r16-64, m16:16-32", [0x0f, 0xb4], 0, 0, 1, 0, -1, Data),
    op!("lgs r16-64, m16:16-32", [0x0f, 0xb5], 0, 0, 1, 0, -1, Data),
    op!("lss r16-64, m16:16-32", [0x0f, 0xb2], 0, 0, 1, 0, -1, Data),
    // additional common instructions.
    op!("cwde", [0x98], 0, 32, 0, 0, -1, Arith),
    op!("cdqe", [0x98], 0, 64, 0, 0, -1, Arith),
    op!("cwd", [0x99], 0, 16, 0, 0, -1, Arith),
    op!("cdq", [0x99], 0, 32, 0, 0, -1, Arith),
    op!("cqo", [0x99], 0, 64, 0, 0, -1, Arith),
    op!("xlat", [0xd7], 0, 0, 0, 0, -1, Data),
    op!("wait", [0x9b], 0, 0, 0, 0, -1, Misc),
    op!("fwait", [0x9b], 0, 0, 0, 0, -1, Misc),
    // arithmetic with imm8.
    op!("add r/m16-64, imm8", [0x83], 1, 0, 1, 0, 0, Arith), // /0
    op!("or r/m16-64, imm8", [0x83], 1, 0, 1, 0, 1, Logic),  // /1
    op!("adc r/m16-64, imm8", [0x83], 1, 0, 1, 0, 2, Arith), // /2
    op!("sbb r/m16-64, imm8", [0x83], 1, 0, 1, 0, 3, Arith), // /3
    op!("and r/m16-64, imm8", [0x83], 1, 0, 1, 0, 4, Logic), // /4
    op!("sub r/m16-64, imm8", [0x83], 1, 0, 1, 0, 5, Arith), // /5
    op!("xor r/m16-64, imm8", [0x83], 1, 0, 1, 0, 6, Logic), // /6
    op!("cmp r/m16-64, imm8", [0x83], 1, 0, 1, 0, 7, Arith), // /7
    // arithmetic with imm32/imm8 (8-bit forms).
    op!("add r/m16-64, imm32", [0x81], 4, 0, 1, 0, 0, Arith), // /0
    op!("or r/m16-64, imm32", [0x81], 4, 0, 1, 0, 1, Logic),  // /1
    op!("adc r/m16-64, imm32", [0x81], 4, 0, 1, 0, 2, Arith), // /2
    op!("sbb r/m16-64, imm32", [0x81], 4, 0, 1, 0, 3, Arith), // /3
    op!("xor r/m16-64, imm32", [0x81], 4, 0, 1, 0, 6, Logic), // /6
    op!("add r/m8, imm8", [0x80], 1, 8, 1, 0, 0, Arith),      // /0
    op!("adc r/m8, imm8", [0x80], 1, 8, 1, 0, 2, Arith),      // /2
    op!("sub r/m8, imm8", [0x80], 1, 8, 1, 0, 5, Arith),      // /5
    op!("cmp r/m8, imm8", [0x80], 1, 8, 1, 0, 7, Arith),      // /7
];
