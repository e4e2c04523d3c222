// CPU benchmarks: dispatch and execution throughput

use criterion::{criterion_group, criterion_main, Criterion};
use nes_core::{Bus, Cpu};
use std::hint::black_box;

fn bench_cpu_instructions(c: &mut Criterion) {
    let mut group = c.benchmark_group("cpu_instructions");

    group.bench_function("nop", |b| {
        let mut cpu = Cpu::new();
        let mut bus = Bus::new();
        bus.load_program(&[0xEA; 256], 0x8000);
        cpu.pc = 0x8000;

        b.iter(|| {
            if cpu.pc >= 0x80FF {
                cpu.pc = 0x8000;
            }
            cpu.step(black_box(&mut bus));
        });
    });

    group.bench_function("lda_immediate", |b| {
        let mut cpu = Cpu::new();
        let mut bus = Bus::new();
        let mut program = Vec::with_capacity(256);
        for _ in 0..128 {
            program.extend_from_slice(&[0xA9, 0x42]); // LDA #$42
        }
        bus.load_program(&program, 0x8000);
        cpu.pc = 0x8000;

        b.iter(|| {
            if cpu.pc >= 0x80FE {
                cpu.pc = 0x8000;
            }
            cpu.step(black_box(&mut bus));
        });
    });

    group.bench_function("adc_immediate", |b| {
        let mut cpu = Cpu::new();
        let mut bus = Bus::new();
        let mut program = Vec::with_capacity(256);
        for _ in 0..128 {
            program.extend_from_slice(&[0x69, 0x01]); // ADC #$01
        }
        bus.load_program(&program, 0x8000);
        cpu.pc = 0x8000;

        b.iter(|| {
            if cpu.pc >= 0x80FE {
                cpu.pc = 0x8000;
            }
            cpu.step(black_box(&mut bus));
        });
    });

    group.bench_function("counted_loop", |b| {
        // LDX #$00; loop: INX; CPX #$FF; BNE loop; terminal JMP self
        let mut cpu = Cpu::new();
        let mut bus = Bus::new();
        bus.load_program(
            &[0xA2, 0x00, 0xE8, 0xE0, 0xFF, 0xD0, 0xFB, 0x4C, 0x07, 0x80],
            0x8000,
        );

        b.iter(|| {
            cpu.pc = 0x8000;
            while cpu.pc != 0x8007 {
                cpu.step(black_box(&mut bus));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_cpu_instructions);
criterion_main!(benches);
