//! Unit tests for the textual IR module.
//!
//! These tests drive `IrModule` through the toolkit contract directly:
//! declarations vs. definitions, result-name uniquing, constant
//! formatting, replacement/erasure behavior, and the consistency check.

use super::ir::{format_double, IrModule};
use super::toolkit::Toolkit;

fn params(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

#[test]
fn test_format_double() {
    assert_eq!(format_double(1.0), "1.000000e+00");
    assert_eq!(format_double(2.0), "2.000000e+00");
    assert_eq!(format_double(0.5), "5.000000e-01");
    assert_eq!(format_double(10.0), "1.000000e+01");
    assert_eq!(format_double(123.456), "1.234560e+02");
    assert_eq!(format_double(0.0), "0.000000e+00");
}

#[test]
fn test_print_empty_module() {
    let module = IrModule::new("empty");

    assert_eq!(
        module.print_to_string(),
        "; ModuleID = 'empty'\nsource_filename = \"empty\"\n"
    );
}

#[test]
fn test_declaration_prints_declare() {
    let mut module = IrModule::new("m");
    module.add_function("cos", &params(&["x"]));

    let printed = module.print_to_string();
    assert!(printed.contains("declare double @cos(double)\n"));
    assert!(!printed.contains("define double @cos"));
}

#[test]
fn test_definition_prints_body() {
    let mut module = IrModule::new("m");
    let function = module.add_function("sum", &params(&["x"]));
    module.append_entry_block(function);
    let x = module.get_param(function, 0);
    module.build_return(x);

    assert_eq!(
        module.print_to_string(),
        "; ModuleID = 'm'\nsource_filename = \"m\"\n\n\
         define double @sum(double %x) {\n\
         entry:\n\
         \x20 ret double %x\n\
         }\n"
    );
}

#[test]
fn test_instruction_result_names_are_uniquified() {
    let mut module = IrModule::new("m");
    let function = module.add_function("f", &params(&["a", "b"]));
    module.append_entry_block(function);
    let a = module.get_param(function, 0);
    let b = module.get_param(function, 1);
    let first = module.build_add(a, b);
    let second = module.build_add(first, b);
    module.build_return(second);

    let printed = module.print_to_string();
    assert!(printed.contains("  %addtmp = fadd double %a, %b\n"));
    assert!(printed.contains("  %addtmp1 = fadd double %addtmp, %b\n"));
    assert!(printed.contains("  ret double %addtmp1\n"));
}

#[test]
fn test_comparison_lowering_prints_compare_and_convert() {
    let mut module = IrModule::new("m");
    let function = module.add_function("lt", &params(&["a", "b"]));
    module.append_entry_block(function);
    let a = module.get_param(function, 0);
    let b = module.get_param(function, 1);
    let compared = module.build_ult(a, b);
    let widened = module.build_ui_to_fp(compared);
    module.build_return(widened);

    let printed = module.print_to_string();
    assert!(printed.contains("  %cmptmp = fcmp ult double %a, %b\n"));
    assert!(printed.contains("  %booltmp = uitofp i1 %cmptmp to double\n"));
}

#[test]
fn test_call_prints_typed_arguments() {
    let mut module = IrModule::new("m");
    let callee = module.add_function("foo", &params(&["a", "b"]));
    let caller = module.add_function("caller", &params(&[]));
    module.append_entry_block(caller);
    let one = module.const_float(1.0);
    let two = module.const_float(2.0);
    let result = module.build_call(callee, &[one, two]);
    module.build_return(result);

    let printed = module.print_to_string();
    assert!(printed.contains(
        "  %calltmp = call double @foo(double 1.000000e+00, double 2.000000e+00)\n"
    ));
}

#[test]
fn test_redeclaration_replaces_previous_function() {
    let mut module = IrModule::new("m");
    let old = module.add_function("foo", &params(&["a"]));
    let new = module.add_function("foo", &params(&["b", "c"]));
    assert_ne!(old, new);
    assert_eq!(module.function_count(), 1);

    let printed = module.print_to_string();
    assert!(printed.contains("declare double @foo(double, double)\n"));
    assert!(!printed.contains("@foo(double)\n"));
}

#[test]
fn test_call_to_erased_function_prints_undef() {
    let mut module = IrModule::new("m");
    let callee = module.add_function("gone", &params(&[]));
    let caller = module.add_function("caller", &params(&[]));
    module.append_entry_block(caller);
    let result = module.build_call(callee, &[]);
    module.build_return(result);
    module.erase_function(callee);

    let printed = module.print_to_string();
    assert!(printed.contains("  %calltmp = call double undef()\n"));
    assert!(!printed.contains("@gone"));
}

#[test]
fn test_verify_accepts_well_formed_function() {
    let mut module = IrModule::new("m");
    let function = module.add_function("f", &params(&["x"]));
    module.append_entry_block(function);
    let x = module.get_param(function, 0);
    let doubled = module.build_add(x, x);
    module.build_return(doubled);

    assert!(module.verify_function(function).is_ok());
}

#[test]
fn test_verify_rejects_missing_return() {
    let mut module = IrModule::new("m");
    let function = module.add_function("f", &params(&["x"]));
    module.append_entry_block(function);
    let x = module.get_param(function, 0);
    module.build_add(x, x);

    let message = module.verify_function(function).unwrap_err();
    assert!(message.contains("not terminated by a return"));
}

#[test]
fn test_verify_rejects_declaration() {
    let mut module = IrModule::new("m");
    let function = module.add_function("f", &params(&[]));

    assert!(module.verify_function(function).is_err());
}

#[test]
fn test_verify_rejects_call_arity_mismatch() {
    let mut module = IrModule::new("m");
    let callee = module.add_function("foo", &params(&["a", "b"]));
    let caller = module.add_function("caller", &params(&[]));
    module.append_entry_block(caller);
    let one = module.const_float(1.0);
    let result = module.build_call(callee, &[one]);
    module.build_return(result);

    let message = module.verify_function(caller).unwrap_err();
    assert!(message.contains("1 arguments for 2 parameters"));
}

#[test]
fn test_verify_rejects_operand_from_another_function() {
    let mut module = IrModule::new("m");
    let first = module.add_function("first", &params(&["x"]));
    module.append_entry_block(first);
    let x = module.get_param(first, 0);
    let foreign = module.build_add(x, x);
    module.build_return(foreign);

    let second = module.add_function("second", &params(&[]));
    module.append_entry_block(second);
    module.build_return(foreign);

    let message = module.verify_function(second).unwrap_err();
    assert!(message.contains("does not dominate"));
}
