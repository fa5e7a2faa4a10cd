/**
 * 详细中文注释 - 加法工具库（adder）
 *
 * 目标
 * - 提供一个最小化的两数求和函数 add 及其单元测试
 * - 运算为纯函数：无状态、无副作用，结果只取决于两个输入
 *
 * 使用注意
 * - 采用 i64 原生整数语义，不做溢出与精度处理
 */

pub fn add(a: i64, b: i64) -> i64 {
    a + b
}
